//! Extract attachments from decoded TNEF containers.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::model::attachment::Attachment;
use crate::model::message::DecodeResult;
use crate::parser::tnef::decode_file_with_limit;

use super::{sanitize_filename_part, unique_path};

/// Options for [`export_bulk`].
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Largest input file that will be decoded.
    pub max_file_size: u64,
    /// Also write `body.txt` / `body.html`.
    pub write_bodies: bool,
    /// Maximum length of a sanitized filename.
    pub max_filename_len: usize,
}

impl ExtractOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size: config.decode.max_file_size,
            write_bodies: config.export.write_bodies,
            max_filename_len: config.export.max_filename_len,
        }
    }
}

/// Totals reported by [`export_bulk`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkStats {
    pub files_decoded: usize,
    pub files_failed: usize,
    /// Attachment or body writes that failed.
    pub write_failures: usize,
    pub written: Vec<PathBuf>,
}

/// Write a single attachment to disk under a sanitized, non-clashing name.
pub fn export_attachment(
    attachment: &Attachment,
    output_dir: &Path,
    max_len: usize,
) -> anyhow::Result<PathBuf> {
    let filename = if attachment.title.trim().is_empty() {
        "untitled".to_string()
    } else {
        sanitize_filename_part(&attachment.title, max_len)
    };
    let path = unique_path(&output_dir.join(&filename));
    std::fs::write(&path, &attachment.data)?;
    Ok(path)
}

/// Write every attachment that carries data. Attachments without data
/// are skipped with a warning.
pub fn export_attachments(
    result: &DecodeResult,
    output_dir: &Path,
    max_len: usize,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut paths = Vec::new();

    for att in &result.attachments {
        if att.data.is_empty() {
            tracing::warn!(title = %att.title, "Attachment has no data, skipping");
            continue;
        }
        paths.push(export_attachment(att, output_dir, max_len)?);
    }

    Ok(paths)
}

/// Decode several TNEF files and extract their content.
///
/// Creates a subfolder per input: `{output_dir}/{file_stem}/`. Inputs that
/// fail to decode are logged and counted, not fatal.
pub fn export_bulk(
    inputs: &[PathBuf],
    output_dir: &Path,
    opts: &ExtractOptions,
    progress: &dyn Fn(usize, usize),
) -> anyhow::Result<BulkStats> {
    std::fs::create_dir_all(output_dir)?;
    let mut stats = BulkStats::default();
    let total = inputs.len();

    for (i, input) in inputs.iter().enumerate() {
        progress(i, total);

        let result = match decode_file_with_limit(input, opts.max_file_size) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    path = %input.display(),
                    error = %e,
                    "Failed to decode TNEF file"
                );
                stats.files_failed += 1;
                continue;
            }
        };
        stats.files_decoded += 1;

        let subfolder = unique_path(&output_dir.join(input_folder_name(input)));
        match export_attachments(&result, &subfolder, opts.max_filename_len) {
            Ok(paths) => stats.written.extend(paths),
            Err(e) => {
                tracing::warn!(
                    path = %subfolder.display(),
                    error = %e,
                    "Failed to export attachments"
                );
                stats.write_failures += 1;
            }
        }
        if opts.write_bodies {
            match super::body::export_bodies(&result, &subfolder) {
                Ok(paths) => stats.written.extend(paths),
                Err(e) => {
                    tracing::warn!(
                        path = %subfolder.display(),
                        error = %e,
                        "Failed to export bodies"
                    );
                    stats.write_failures += 1;
                }
            }
        }
    }
    progress(total, total);

    Ok(stats)
}

/// Generate a folder name for one input file's content.
fn input_folder_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_filename_part(&stem, 60)
}
