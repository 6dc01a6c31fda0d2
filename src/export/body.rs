//! Write the plain-text and HTML bodies of a decoded message.

use std::path::{Path, PathBuf};

use crate::model::message::DecodeResult;

/// Write `body.txt` and `body.html` into `output_dir` for whichever
/// bodies are present. Existing files are not overwritten.
pub fn export_bodies(result: &DecodeResult, output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for (name, bytes) in [("body.txt", &result.body), ("body.html", &result.body_html)] {
        if bytes.is_empty() {
            continue;
        }
        std::fs::create_dir_all(output_dir)?;
        let path = super::unique_path(&output_dir.join(name));
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "Wrote body");
        paths.push(path);
    }
    Ok(paths)
}
