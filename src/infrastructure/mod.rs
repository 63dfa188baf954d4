// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external crates and system I/O.
//!
//! # Available Adapters
//!
//! - [`qrcode`]: QR matrix generation and PNG rasterization (implements [`QrEncoder`])
//! - [`clipboard`]: System clipboard via `arboard` (implements [`ClipboardWriter`])
//! - [`filesystem`]: Download files on local disk (implements [`ImageSaver`])
//!
//! [`QrEncoder`]: crate::application::port::QrEncoder
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter
//! [`ImageSaver`]: crate::application::port::ImageSaver

pub mod clipboard;
pub mod filesystem;
pub mod qrcode;

pub use self::qrcode::QrCodeEncoder;
pub use clipboard::ArboardClipboard;
pub use filesystem::FsImageSaver;
