// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events are captured during application usage, stored in a memory-bounded
//! circular buffer, and exported as JSON for troubleshooting.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Channel-fed storage
//!
//! # Privacy
//!
//! URLs typed by the user are recorded as a [`UrlSummary`] (length and
//! scheme). Free-form messages go through [`sanitize_message`].

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppOperation, AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use export::{
    default_export_directory, generate_default_filename, ExportError, MAX_CLIPBOARD_SIZE_BYTES,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
pub use sanitizer::{sanitize_message, UrlSummary};
