//! CLI entry point for `tnefshell`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{CommandFactory, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use tnefshell::config::Config;
use tnefshell::export::attachment::{export_bulk, ExtractOptions};
use tnefshell::model::message::DecodeResult;
use tnefshell::names;
use tnefshell::parser::{decode_file_with_limit, read_file_with_limit, Records};

#[derive(Parser)]
#[command(
    name = "tnefshell",
    version,
    about = "Decode TNEF (winmail.dat) files: bodies, attachments and MAPI properties"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a TNEF file
    Info {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the MAPI properties of a TNEF file
    Props {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the raw container records
    Records {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the message body
    Body {
        path: PathBuf,
        /// Print the HTML body instead of the plain-text one
        #[arg(long)]
        html: bool,
    },
    /// Extract attachments (and bodies) from one or more TNEF files
    Extract {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tnefshell::config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Commands::Info { path, json } => cmd_info(&path, json, &config),
        Commands::Props { path, json } => cmd_props(&path, json, &config),
        Commands::Records { path, json } => cmd_records(&path, json, &config),
        Commands::Body { path, html } => cmd_body(&path, html, &config),
        Commands::Extract { inputs, output } => cmd_extract(&inputs, output, &config),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_path = tnefshell::config::log_file_path(config);
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let log_name = log_path.file_name().unwrap_or_else(|| "tnefshell.log".as_ref());
    if std::fs::create_dir_all(log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(log_dir, log_name);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

fn load(path: &Path, config: &Config) -> anyhow::Result<DecodeResult> {
    Ok(decode_file_with_limit(path, config.decode.max_file_size)?)
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tnefshell", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Print a summary of a TNEF file.
fn cmd_info(path: &Path, json: bool, config: &Config) -> anyhow::Result<()> {
    let start = Instant::now();
    let result = load(path, config)?;
    let elapsed = start.elapsed();

    if json {
        print_info_json(path, &result)
    } else {
        print_info_table(path, &result, elapsed);
        Ok(())
    }
}

/// List every decoded MAPI property.
fn cmd_props(path: &Path, json: bool, config: &Config) -> anyhow::Result<()> {
    let result = load(path, config)?;

    if json {
        let items: Vec<serde_json::Value> = result
            .properties
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.name,
                    "name": names::property_name(p.name),
                    "type": p.prop_type,
                    "type_name": names::type_name(p.prop_type),
                    "multi_value": p.multi_value,
                    "guid": (p.guid != 0).then(|| format!("{:032x}", p.guid)),
                    "value_count": p.spans.len(),
                    "size": p.data.len(),
                    "value": p.display_value(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!();
    println!(
        "  {:<8} {:<36} {:<10} {:>8}  {}",
        "Id", "Name", "Type", "Size", "Value"
    );
    println!("  {}", "-".repeat(98));
    for p in &result.properties {
        let type_name = names::type_name(p.prop_type).unwrap_or("?");
        let label: String = names::property_label(p.name).chars().take(35).collect();
        let value: String = p.display_value().chars().take(40).collect();
        println!(
            "  {:<8} {:<36} {:<10} {:>8}  {}",
            format!("{:#06x}", p.name),
            label,
            type_name,
            p.data.len(),
            value
        );
    }
    println!();
    Ok(())
}

/// List container records in file order.
fn cmd_records(path: &Path, json: bool, config: &Config) -> anyhow::Result<()> {
    let data = read_file_with_limit(path, config.decode.max_file_size)?;
    let records = Records::new(&data)?.collect::<Result<Vec<_>, _>>()?;

    if json {
        let items: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "offset": r.offset,
                    "level": r.level,
                    "id": r.name,
                    "name": names::attribute_name(r.name),
                    "type": r.kind,
                    "size": r.payload.len(),
                    "checksum": r.checksum,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!();
    println!(
        "  {:>10} {:<5} {:<8} {:<28} {:>10}",
        "Offset", "Level", "Id", "Name", "Size"
    );
    println!("  {}", "-".repeat(65));
    for r in &records {
        println!(
            "  {:>10} {:<5} {:<8} {:<28} {:>10}",
            r.offset,
            r.level,
            format!("{:#06x}", r.name),
            names::attribute_name(r.name).unwrap_or("?"),
            r.payload.len()
        );
    }
    println!();
    Ok(())
}

/// Write the plain-text or HTML body to stdout.
fn cmd_body(path: &Path, html: bool, config: &Config) -> anyhow::Result<()> {
    let result = load(path, config)?;
    let text = if html {
        result.body_html_text()
    } else {
        result.body_text()
    };
    let Some(text) = text else {
        anyhow::bail!(
            "{} has no {} body",
            path.display(),
            if html { "HTML" } else { "plain-text" }
        );
    };
    print!("{text}");
    Ok(())
}

/// Extract attachments from one or more TNEF files.
fn cmd_extract(
    inputs: &[PathBuf],
    output: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    for input in inputs {
        if !input.exists() {
            anyhow::bail!("File not found: {}", input.display());
        }
    }

    let output = output
        .or_else(|| config.export.default_output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Extracting [{bar:40.cyan/blue}] {pos}/{len} files")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let stats = export_bulk(
        inputs,
        &output,
        &ExtractOptions::from_config(config),
        &|current, _total| {
            pb.set_position(current as u64);
        },
    )?;

    pb.finish_and_clear();
    println!(
        "  Extracted {} file(s) from {} input(s) to {}",
        stats.written.len(),
        stats.files_decoded,
        output.display()
    );
    if stats.files_failed > 0 {
        println!("  {} input(s) could not be decoded", stats.files_failed);
    }
    if stats.write_failures > 0 {
        println!("  {} write(s) failed, see the log", stats.write_failures);
    }

    Ok(())
}

/// Print a summary in a human-readable table.
fn print_info_table(path: &Path, result: &DecodeResult, elapsed: std::time::Duration) {
    use humansize::{format_size, BINARY};

    println!();
    println!("  {:<20} {}", "File", path.display());
    println!(
        "  {:<20} {}",
        "Body",
        format_size(result.body.len() as u64, BINARY)
    );
    println!(
        "  {:<20} {}",
        "HTML body",
        format_size(result.body_html.len() as u64, BINARY)
    );
    println!("  {:<20} {}", "MAPI properties", result.properties.len());
    println!(
        "  {:<20} {} ({})",
        "Attachments",
        result.attachments.len(),
        format_size(result.attachments_size(), BINARY)
    );
    println!("  {:<20} {:.2?}", "Decoding time", elapsed);

    if !result.attachments.is_empty() {
        println!();
        for att in &result.attachments {
            let title = if att.title.is_empty() {
                "(untitled)"
            } else {
                att.title.as_str()
            };
            println!("    {:>10}  {title}", format_size(att.size(), BINARY));
        }
    }
    println!();
}

/// Print a summary as JSON.
fn print_info_json(path: &Path, result: &DecodeResult) -> anyhow::Result<()> {
    let attachments: Vec<serde_json::Value> = result
        .attachments
        .iter()
        .map(|a| {
            serde_json::json!({
                "title": a.title,
                "size": a.size(),
            })
        })
        .collect();

    let info = serde_json::json!({
        "file": path.to_string_lossy(),
        "body_size": result.body.len(),
        "body_html_size": result.body_html.len(),
        "property_count": result.properties.len(),
        "attachment_count": result.attachments.len(),
        "attachments": attachments,
    });

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
