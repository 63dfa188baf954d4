// SPDX-License-Identifier: MPL-2.0
//! QR rendering newtypes.
//!
//! This module provides type-safe wrappers for rendering values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Pixel Size Bounds
// =============================================================================

/// Output image size bounds (200px to 800px, in steps of 50px).
pub mod size_bounds {
    /// Minimum output size in pixels.
    pub const MIN: u32 = 200;
    /// Maximum output size in pixels.
    pub const MAX: u32 = 800;
    /// Slider step in pixels.
    pub const STEP: u32 = 50;
    /// Default output size in pixels.
    pub const DEFAULT: u32 = 300;
}

// =============================================================================
// PixelSize
// =============================================================================

/// Edge length of the generated square image, guaranteed to be within
/// 200px–800px and aligned on the 50px step grid.
///
/// Values outside the range are clamped; values between two steps snap to
/// the nearest one (ties round up).
///
/// # Example
///
/// ```
/// use iced_qr::domain::qr::PixelSize;
///
/// assert_eq!(PixelSize::new(520).value(), 500);
/// assert_eq!(PixelSize::new(1200).value(), 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSize(u32);

impl PixelSize {
    /// Creates a new size, clamping to the valid range and snapping to the step grid.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        let clamped = pixels.clamp(size_bounds::MIN, size_bounds::MAX);
        let offset = clamped - size_bounds::MIN;
        let steps = (offset + size_bounds::STEP / 2) / size_bounds::STEP;
        Self((size_bounds::MIN + steps * size_bounds::STEP).min(size_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PixelSize {
    fn default() -> Self {
        Self(size_bounds::DEFAULT)
    }
}

// =============================================================================
// Margin Bounds
// =============================================================================

/// Quiet-zone bounds, expressed in modules.
pub mod margin_bounds {
    /// Minimum quiet zone (no border).
    pub const MIN: u32 = 0;
    /// Maximum quiet zone.
    pub const MAX: u32 = 10;
    /// Default quiet zone.
    pub const DEFAULT: u32 = 2;
}

// =============================================================================
// Margin
// =============================================================================

/// Width of the blank border around the symbol, in modules (0–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Margin(u32);

impl Margin {
    /// Creates a new margin, clamping the value to the valid range.
    #[must_use]
    pub fn new(modules: u32) -> Self {
        Self(modules.clamp(margin_bounds::MIN, margin_bounds::MAX))
    }

    /// Returns the raw module count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self(margin_bounds::DEFAULT)
    }
}
