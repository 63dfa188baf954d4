// SPDX-License-Identifier: MPL-2.0
//! `arboard` adapter implementing the [`ClipboardWriter`] port trait.
//!
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter

use crate::application::port::{ClipboardError, ClipboardImage, ClipboardWriter};
use std::borrow::Cow;

/// System clipboard backed by `arboard`.
///
/// A fresh `arboard::Clipboard` is opened for every write so the adapter
/// stays `Send + Sync` and can be driven from a blocking task.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_image(&self, image: ClipboardImage) -> Result<(), ClipboardError> {
        let expected = image.width as usize * image.height as usize * 4;
        if image.rgba.len() != expected {
            return Err(ClipboardError::InvalidImage(format!(
                "expected {expected} bytes, got {}",
                image.rgba.len()
            )));
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_image(arboard::ImageData {
                width: image.width as usize,
                height: image.height as usize,
                bytes: Cow::Owned(image.rgba),
            })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}
