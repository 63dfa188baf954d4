// SPDX-License-Identifier: MPL-2.0
//! QR rendering domain types.
//!
//! This module contains the value objects describing *how* a QR code image
//! should look, independent of the library that computes the symbol:
//! - [`PixelSize`]: Output edge length (200–800px, 50px steps)
//! - [`Margin`]: Quiet zone in modules
//! - [`ErrorCorrection`]: L / M / Q / H redundancy tiers
//! - [`HexColor`]: Foreground and background colors
//! - [`RenderOptions`]: The full option set sent to an encoder

mod newtypes;
mod types;

pub use newtypes::{margin_bounds, size_bounds, Margin, PixelSize};
pub use types::{ErrorCorrection, HexColor, HexColorError, RenderOptions};
