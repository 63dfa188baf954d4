// SPDX-License-Identifier: MPL-2.0
//! `iced_qr` is a small QR code generator built with the Iced GUI framework.
//!
//! It turns a URL into a downloadable PNG, with adjustable size, error
//! correction and colors. The interface is internationalized with Fluent and
//! adapts its layout to the window width.

#![doc(html_root_url = "https://docs.rs/iced_qr/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
