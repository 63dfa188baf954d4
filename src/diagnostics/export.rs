// SPDX-License-Identifier: MPL-2.0
//! Export helpers for diagnostic reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Maximum clipboard content size in bytes (10 MB).
pub const MAX_CLIPBOARD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Serialization(serde_json::Error),
    Clipboard(String),
    ContentTooLarge { size: usize, max_size: usize },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for display
            Self::ContentTooLarge { size, max_size } => {
                let size_mb = *size as f64 / (1024.0 * 1024.0);
                let max_mb = *max_size as f64 / (1024.0 * 1024.0);
                write!(
                    f,
                    "content too large for clipboard: {size_mb:.1} MB exceeds {max_mb:.1} MB limit"
                )
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Clipboard(_) | Self::ContentTooLarge { .. } => None,
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

/// Default report name, e.g. `iced_qr_diagnostics_20250101_120000.json`.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("iced_qr_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes `content` through a temporary sibling file and a rename.
///
/// # Errors
///
/// Returns the underlying I/O error; the temporary file is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Documents folder, or the current directory when it is unknown.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn export_error_io_displays_correctly() {
        let err = ExportError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn export_error_content_too_large_shows_megabytes() {
        let err = ExportError::ContentTooLarge {
            size: 15 * 1024 * 1024,
            max_size: MAX_CLIPBOARD_SIZE_BYTES,
        };
        assert_eq!(
            err.to_string(),
            "content too large for clipboard: 15.0 MB exceeds 10.0 MB limit"
        );
    }

    #[test]
    fn default_filename_has_prefix_and_extension() {
        let name = generate_default_filename();
        assert!(name.starts_with("iced_qr_diagnostics_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_atomic(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
