// SPDX-License-Identifier: MPL-2.0
//! Download port definition.
//!
//! The [`ImageSaver`] trait materializes a generated image as a file.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix of generated download names.
pub const FILE_NAME_PREFIX: &str = "qrcode";

/// Extension of generated download names.
pub const FILE_EXTENSION: &str = "png";

/// Errors that can occur while saving an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The target directory is missing and could not be created,
    /// or the file could not be written.
    Io(String),
    /// No free file name was found for the request.
    NameExhausted,
}

impl SaveError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "generator-error-download-failed"
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(msg) => write!(f, "I/O error: {msg}"),
            SaveError::NameExhausted => write!(f, "no free file name available"),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err.to_string())
    }
}

/// Where and how a download should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub directory: PathBuf,
    pub file_name: String,
    /// When `false`, an existing file is never replaced; a numbered
    /// variant of the name is used instead.
    pub overwrite: bool,
}

impl SaveRequest {
    /// A request for a fresh, timestamped file in `directory`.
    #[must_use]
    pub fn timestamped(directory: impl Into<PathBuf>, unix_millis: i64) -> Self {
        Self {
            directory: directory.into(),
            file_name: timestamped_file_name(unix_millis),
            overwrite: false,
        }
    }

    /// A request for an exact path the user already confirmed.
    #[must_use]
    pub fn exact(path: &Path) -> Self {
        Self {
            directory: path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| timestamped_file_name(0)),
            overwrite: true,
        }
    }
}

/// Builds the default download name, e.g. `qrcode-1718000000000.png`.
#[must_use]
pub fn timestamped_file_name(unix_millis: i64) -> String {
    format!("{FILE_NAME_PREFIX}-{unix_millis}.{FILE_EXTENSION}")
}

/// Writes image bytes to persistent storage.
pub trait ImageSaver: Send + Sync {
    /// Saves `png` according to `request` and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the file cannot be written.
    fn save(&self, request: &SaveRequest, png: &[u8]) -> Result<PathBuf, SaveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamped_names_embed_millis() {
        assert_eq!(timestamped_file_name(1_700_000_000_123), "qrcode-1700000000123.png");
    }

    #[test]
    fn timestamped_request_never_overwrites() {
        let request = SaveRequest::timestamped("/tmp", 42);
        assert!(!request.overwrite);
        assert_eq!(request.file_name, "qrcode-42.png");
    }

    #[test]
    fn exact_request_splits_path() {
        let request = SaveRequest::exact(Path::new("/home/user/codes/site.png"));
        assert_eq!(request.directory, PathBuf::from("/home/user/codes"));
        assert_eq!(request.file_name, "site.png");
        assert!(request.overwrite);
    }
}
