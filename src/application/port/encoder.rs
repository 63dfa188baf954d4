// SPDX-License-Identifier: MPL-2.0
//! QR encoding port definition.
//!
//! This module defines the [`QrEncoder`] trait, the single integration point
//! with the library that computes QR symbols, and the [`EncodedImage`] it
//! produces.
//!
//! # Design Notes
//!
//! - The encoder is a black box: it either returns image data or an error
//! - The trait is `Send + Sync` so it can run on a blocking worker thread
//! - The image payload is a PNG wrapped in a `data:` URI

use crate::domain::qr::RenderOptions;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

/// Prefix of every data URI produced by encoders.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// =============================================================================
// EncodeError
// =============================================================================

/// Errors that can occur while encoding a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload does not fit in a QR symbol at the requested
    /// error-correction level.
    DataTooLong {
        /// Payload length in bytes.
        len: usize,
    },

    /// The symbol was computed but could not be turned into an image.
    Rendering(String),
}

impl EncodeError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EncodeError::DataTooLong { .. } => "generator-error-data-too-long",
            EncodeError::Rendering(_) => "generator-error-encode-failed",
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DataTooLong { len } => {
                write!(f, "payload of {len} bytes exceeds QR capacity")
            }
            EncodeError::Rendering(msg) => write!(f, "rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {}

// =============================================================================
// DataUriError
// =============================================================================

/// Errors that can occur while unpacking an [`EncodedImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUriError {
    /// The URI does not start with `data:image/png;base64,`.
    UnsupportedScheme,
    /// The base64 body is invalid.
    InvalidBase64(String),
}

impl fmt::Display for DataUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUriError::UnsupportedScheme => write!(f, "not a PNG data URI"),
            DataUriError::InvalidBase64(msg) => write!(f, "invalid base64 payload: {msg}"),
        }
    }
}

impl std::error::Error for DataUriError {}

// =============================================================================
// EncodedImage
// =============================================================================

/// A rendered QR code, kept as a PNG data URI together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_uri: String,
    width: u32,
    height: u32,
    source: String,
    options: RenderOptions,
}

impl EncodedImage {
    /// Wraps PNG bytes into a data URI.
    #[must_use]
    pub fn from_png(
        png: &[u8],
        width: u32,
        height: u32,
        source: impl Into<String>,
        options: RenderOptions,
    ) -> Self {
        Self {
            data_uri: format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)),
            width,
            height,
            source: source.into(),
            options,
        }
    }

    /// The `data:image/png;base64,…` representation.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Decodes the data URI back into PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError`] if the URI is not a base64 PNG data URI.
    pub fn png_bytes(&self) -> Result<Vec<u8>, DataUriError> {
        let body = self
            .data_uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or(DataUriError::UnsupportedScheme)?;
        STANDARD
            .decode(body)
            .map_err(|e| DataUriError::InvalidBase64(e.to_string()))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The text that was encoded.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The options the image was rendered with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

// =============================================================================
// QrEncoder Trait
// =============================================================================

/// Turns a text payload into a QR code image.
///
/// Any encoder following ISO/IEC 18004 capacity and error-correction
/// semantics can implement this trait.
pub trait QrEncoder: Send + Sync {
    /// Encodes `text` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DataTooLong`] if the payload exceeds the
    /// capacity of the largest symbol at the chosen error-correction level,
    /// or [`EncodeError::Rendering`] if the image could not be produced.
    fn encode(&self, text: &str, options: &RenderOptions) -> Result<EncodedImage, EncodeError>;
}
