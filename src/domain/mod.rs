// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules. It has no
//! dependencies on external crates (except `std`) to ensure testability
//! and architectural purity.
//!
//! # Modules
//!
//! - [`qr`]: Rendering options ([`PixelSize`](qr::PixelSize),
//!   [`ErrorCorrection`](qr::ErrorCorrection), [`HexColor`](qr::HexColor),
//!   [`RenderOptions`](qr::RenderOptions))
//! - [`diagnostics`]: Diagnostics value types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod diagnostics;
pub mod qr;
