// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Generator**: Quiet-zone margin
//! - **Diagnostics**: Event buffer capacity
//! - **Notifications**: Toast auto-dismiss delays
//! - **Window**: Initial and minimum window size

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::qr::margin_bounds;

// ==========================================================================
// Generator Defaults
// ==========================================================================

/// Default quiet-zone width in modules.
pub const DEFAULT_MARGIN_MODULES: u32 = margin_bounds::DEFAULT;

/// Minimum quiet-zone width in modules.
pub const MIN_MARGIN_MODULES: u32 = margin_bounds::MIN;

/// Maximum quiet-zone width in modules.
pub const MAX_MARGIN_MODULES: u32 = margin_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum number of diagnostic events kept in memory.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum number of diagnostic events kept in memory.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const NOTIFICATION_SHORT_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const NOTIFICATION_LONG_MS: u64 = 5_000;

/// Tick interval while toasts are visible (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 250;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1080.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_MARGIN_MODULES >= MIN_MARGIN_MODULES);
    assert!(DEFAULT_MARGIN_MODULES >= MIN_MARGIN_MODULES);
    assert!(DEFAULT_MARGIN_MODULES <= MAX_MARGIN_MODULES);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(NOTIFICATION_TICK_MS < NOTIFICATION_SHORT_MS);
    assert!(NOTIFICATION_SHORT_MS <= NOTIFICATION_LONG_MS);

    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
