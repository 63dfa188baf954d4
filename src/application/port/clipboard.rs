// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definition.
//!
//! The [`ClipboardWriter`] trait places an RGBA image on the system clipboard.
//! Hosts may refuse image writes (headless sessions, sandboxing), which is
//! reported as [`ClipboardError::Unavailable`].

use std::fmt;

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard cannot be opened or refuses image content.
    Unavailable(String),
    /// The image could not be converted into a clipboard payload.
    InvalidImage(String),
}

impl ClipboardError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "generator-error-copy-failed"
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::InvalidImage(msg) => write!(f, "invalid clipboard image: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Raw image payload handed to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
}

impl ClipboardImage {
    /// Decodes PNG bytes into an RGBA payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::InvalidImage`] if the bytes are not a PNG.
    pub fn from_png(png: &[u8]) -> Result<Self, ClipboardError> {
        let decoded = image_rs::load_from_memory_with_format(png, image_rs::ImageFormat::Png)
            .map_err(|e| ClipboardError::InvalidImage(e.to_string()))?
            .to_rgba8();
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            rgba: decoded.into_raw(),
        })
    }
}

/// Writes images to the system clipboard.
pub trait ClipboardWriter: Send + Sync {
    /// Replaces the clipboard content with `image`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the host denies the write.
    fn write_image(&self, image: ClipboardImage) -> Result<(), ClipboardError>;
}
