// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of the application that generated the report
    pub app_version: String,
    /// Operating system family (`linux`, `macos`, `windows`, ...)
    pub os: String,
    /// When diagnostic collection started (RFC 3339)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// A diagnostic event that can be serialized to JSON.
///
/// `Instant` timestamps become milliseconds since collection started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Per-kind event counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub operations: usize,
    pub failed_operations: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        use super::AppOperation;

        events.iter().fold(Self::default(), |mut summary, event| {
            match &event.kind {
                DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                DiagnosticEventKind::Operation { operation } => {
                    summary.operations += 1;
                    let success = match operation {
                        AppOperation::Encode { success, .. }
                        | AppOperation::SaveImage { success, .. }
                        | AppOperation::CopyImage { success, .. } => *success,
                    };
                    if !success {
                        summary.failed_operations += 1;
                    }
                }
                DiagnosticEventKind::AppState { .. } => {}
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                DiagnosticEventKind::Error { .. } => summary.errors += 1,
            }
            summary
        })
    }
}

/// A complete diagnostic report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    /// Creates a new diagnostic report with summary computed automatically.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            events,
            summary,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AppOperation, UserAction};
    use std::time::Duration;

    #[test]
    fn serializable_event_uses_relative_millis() {
        let start = Instant::now();
        let later = start + Duration::from_millis(250);
        let event = SerializableEvent::new(
            later,
            start,
            DiagnosticEventKind::Warning {
                message: "w".to_string(),
            },
        );
        assert_eq!(event.timestamp_ms, 250);
    }

    #[test]
    fn event_before_collection_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::Error {
                message: "e".to_string(),
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_each_kind() {
        let start = Instant::now();
        let events: Vec<_> = [
            DiagnosticEventKind::UserAction {
                action: UserAction::Reset,
                details: None,
            },
            DiagnosticEventKind::Operation {
                operation: AppOperation::CopyImage {
                    duration_ms: 3,
                    success: false,
                },
            },
            DiagnosticEventKind::Operation {
                operation: AppOperation::SaveImage {
                    duration_ms: 3,
                    success: true,
                },
            },
            DiagnosticEventKind::Warning {
                message: "w".to_string(),
            },
            DiagnosticEventKind::Error {
                message: "e".to_string(),
            },
        ]
        .into_iter()
        .map(|kind| SerializableEvent::new(start, start, kind))
        .collect();

        let summary = ReportSummary::from_events(&events);
        assert_eq!(
            summary,
            ReportSummary {
                user_actions: 1,
                operations: 2,
                failed_operations: 1,
                warnings: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn report_json_contains_metadata_and_flattened_events() {
        let start = Instant::now();
        let events = vec![SerializableEvent::new(
            start,
            start,
            DiagnosticEventKind::UserAction {
                action: UserAction::Download,
                details: None,
            },
        )];
        let report = DiagnosticReport::new(ReportMetadata::new(Utc::now(), 10, 1), events);
        let json = report.to_json().unwrap();

        assert!(json.contains("\"app_version\""));
        assert!(json.contains("\"type\": \"user_action\""));
        assert!(json.contains("\"action\": \"download\""));
    }
}
