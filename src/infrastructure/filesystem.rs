// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapter implementing the [`ImageSaver`] port trait.
//!
//! [`ImageSaver`]: crate::application::port::ImageSaver

use crate::application::port::{ImageSaver, SaveError, SaveRequest};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// How many numbered variants are tried before giving up.
pub const MAX_NAME_ATTEMPTS: u32 = 100;

/// Writes PNG files to local directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSaver;

impl FsImageSaver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageSaver for FsImageSaver {
    fn save(&self, request: &SaveRequest, png: &[u8]) -> Result<PathBuf, SaveError> {
        fs::create_dir_all(&request.directory)?;

        if request.overwrite {
            let path = request.directory.join(&request.file_name);
            fs::write(&path, png)?;
            return Ok(path);
        }

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = request
                .directory
                .join(numbered_name(&request.file_name, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(png)?;
                    return Ok(path);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            }
        }

        Err(SaveError::NameExhausted)
    }
}

/// Returns `name` for attempt 0, and `stem-N.ext` afterwards.
fn numbered_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem}-{attempt}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{attempt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn numbered_name_keeps_extension() {
        assert_eq!(numbered_name("qrcode-1.png", 0), "qrcode-1.png");
        assert_eq!(numbered_name("qrcode-1.png", 2), "qrcode-1-2.png");
        assert_eq!(numbered_name("README", 1), "README-1");
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let target = temp_dir.path().join("nested").join("downloads");
        let request = SaveRequest::timestamped(&target, 1_700_000_000_000);

        let path = FsImageSaver::new().save(&request, b"png").unwrap();

        assert_eq!(path, target.join("qrcode-1700000000000.png"));
        assert_eq!(fs::read(&path).unwrap(), b"png");
    }

    #[test]
    fn save_never_overwrites_timestamped_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let request = SaveRequest::timestamped(temp_dir.path(), 42);
        let saver = FsImageSaver::new();

        let first = saver.save(&request, b"first").unwrap();
        let second = saver.save(&request, b"second").unwrap();

        assert_ne!(first, second);
        assert_eq!(second.file_name().unwrap(), "qrcode-42-1.png");
        assert_eq!(fs::read(&first).unwrap(), b"first");
        assert_eq!(fs::read(&second).unwrap(), b"second");
    }

    #[test]
    fn exact_request_replaces_existing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("chosen.png");
        fs::write(&path, b"old").unwrap();

        let written = FsImageSaver::new()
            .save(&SaveRequest::exact(&path), b"new")
            .unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn save_reports_io_error_when_directory_is_a_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let request = SaveRequest::timestamped(blocker.join("sub"), 1);
        let err = FsImageSaver::new().save(&request, b"png").unwrap_err();
        assert!(matches!(err, SaveError::Io(_)));
    }
}
