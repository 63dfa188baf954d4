// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the generator is used.
//! No event carries a user-typed URL verbatim; see [`UrlSummary`].

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::sanitizer::UrlSummary;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Generator Actions
    // ==========================================================================
    /// Explicit Generate (button, Enter key or command line).
    Generate {
        /// Shape of the submitted URL.
        url: UrlSummary,
    },

    /// Restore every field to its default.
    Reset,

    /// Save the current image as a file.
    Download,

    /// Copy the current image to the clipboard.
    Copy,

    // ==========================================================================
    // Option Changes
    // ==========================================================================
    /// Change the output size.
    SetSize {
        /// New size in pixels.
        pixels: u32,
    },

    /// Change the error-correction level.
    SetErrorCorrection {
        /// Level letter (L, M, Q or H).
        level: String,
    },

    /// Change the dark module color.
    SetDarkColor {
        /// Color in `#RRGGBB` notation.
        color: String,
    },

    /// Change the background color.
    SetLightColor {
        /// Color in `#RRGGBB` notation.
        color: String,
    },

    // ==========================================================================
    // Application Actions
    // ==========================================================================
    /// Switch the UI language.
    ChangeLanguage {
        /// Locale identifier.
        locale: String,
    },

    /// Switch the theme mode.
    ChangeTheme {
        /// `light`, `dark` or `system`.
        mode: String,
    },

    /// Copy the diagnostics report to the clipboard.
    CopyDiagnostics,
}

/// Side-effecting operations with their outcome and duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// One encode request, including rasterization and PNG packing.
    Encode {
        duration_ms: u64,
        size: u32,
        level: String,
        payload_len: usize,
        success: bool,
    },

    /// One download.
    SaveImage { duration_ms: u64, success: bool },

    /// One clipboard write.
    CopyImage { duration_ms: u64, success: bool },
}

/// Application state changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The window opened.
    Started {
        version: String,
        locale: String,
    },

    /// An encode result arrived after a newer request and was dropped.
    StaleResultDiscarded { ticket: u64 },

    /// The window crossed a layout breakpoint.
    BreakpointChanged { breakpoint: String },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Operation {
        operation: AppOperation,
    },
    AppState {
        state: AppStateEvent,
    },
    /// Non-critical issue, message already sanitized.
    Warning {
        message: String,
    },
    /// Failed operation, message already sanitized.
    Error {
        message: String,
    },
}
