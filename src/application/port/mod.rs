// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types and plain data, ensuring the application
//! layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`encoder`]: QR symbol computation and rasterisation
//! - [`clipboard`]: Image clipboard writes
//! - [`saver`]: Image downloads to the file system
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can run on blocking worker threads
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - use Iced's `Task` return type pattern in callers
//!
//! # Example
//!
//! ```ignore
//! use iced_qr::application::port::QrEncoder;
//! use iced_qr::domain::qr::RenderOptions;
//!
//! fn preview(encoder: &impl QrEncoder, url: &str) -> Option<String> {
//!     encoder
//!         .encode(url, &RenderOptions::default())
//!         .ok()
//!         .map(|image| image.data_uri().to_string())
//! }
//! ```

pub mod clipboard;
pub mod encoder;
pub mod saver;

// Re-export main types for convenience
pub use clipboard::{ClipboardError, ClipboardImage, ClipboardWriter};
pub use encoder::{DataUriError, EncodeError, EncodedImage, QrEncoder, PNG_DATA_URI_PREFIX};
pub use saver::{timestamped_file_name, ImageSaver, SaveError, SaveRequest};
