// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
    /// No data directory could be determined.
    NoExportDirectory,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::NoExportDirectory => write!(f, "no export directory available"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NoExportDirectory => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Default report file name.
///
/// Format: `model_lens_diagnostics_YYYYMMDD_HHMMSS.json` (local time).
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "model_lens_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` next to `path` first, then renames it into place.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Writes a report into `dir` under the default file name.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory cannot be created or the
/// file cannot be written.
pub fn write_report_to_dir(dir: &Path, json: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(generate_default_filename());
    write_atomic(&path, json)?;
    Ok(path)
}
