// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Events are sent from anywhere through a [`DiagnosticsHandle`] and drained
//! into the collector's circular buffer on each UI tick.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{write_atomic, ExportError, MAX_CLIPBOARD_SIZE_BYTES};
use super::{
    sanitize_message, AppOperation, AppStateEvent, BufferCapacity, CircularBuffer,
    DiagnosticEvent, DiagnosticEventKind, DiagnosticReport, ReportMetadata, SerializableEvent,
    UserAction,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: details.map(|d| sanitize_message(&d)),
        });
    }

    pub fn log_operation(&self, operation: AppOperation) {
        self.send(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning; the message is sanitized first.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: sanitize_message(&message.into()),
        });
    }

    /// Logs an error; the message is sanitized first.
    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: sanitize_message(&message.into()),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the buffered events as a pretty JSON report.
    ///
    /// Call [`process_pending`](Self::process_pending) first to include
    /// events still in the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            self.collection_started_at.elapsed().as_millis() as u64,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Writes the report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if file operations fail.
    /// Returns `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    /// Copies the report to the system clipboard as text.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::ContentTooLarge` if the JSON exceeds 10 MB.
    /// Returns `ExportError::Clipboard` if clipboard access fails.
    /// Returns `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_clipboard(&self) -> Result<(), ExportError> {
        let json = self.export_json()?;

        if json.len() > MAX_CLIPBOARD_SIZE_BYTES {
            return Err(ExportError::ContentTooLarge {
                size: json.len(),
                max_size: MAX_CLIPBOARD_SIZE_BYTES,
            });
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;

        clipboard
            .set_text(&json)
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;

        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::Reset);
        handle.log_warning("careful");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handle_drops_events_when_channel_is_full() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(5000));
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 20) {
            handle.log_action(UserAction::Copy);
        }
        collector.process_pending();

        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_capacity_bounds_stored_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(50));
        let handle = collector.handle();

        for round in 0..3 {
            for _ in 0..40 {
                handle.log_action(UserAction::Download);
            }
            collector.process_pending();
            assert!(collector.len() <= 50, "round {round}");
        }
        assert_eq!(collector.len(), 50);
    }

    #[test]
    fn errors_are_sanitized_when_logged() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_error("could not write /home/alice/Downloads/qrcode-1.png");
        collector.process_pending();

        let event = collector.iter().next().unwrap();
        assert_eq!(
            event.kind,
            DiagnosticEventKind::Error {
                message: "could not write <path>".to_string()
            }
        );
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::SetSize { pixels: 400 });
        collector.process_pending();

        let json = collector.export_json().unwrap();
        assert!(json.contains("\"event_count\": 1"));
        assert!(json.contains("\"set_size\""));
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::Reset);
        collector.process_pending();

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let written = collector.export_to_file(&path).unwrap();

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["metadata"]["event_count"], 1);
    }

    #[test]
    #[ignore = "Clipboard not available in CI/headless environments"]
    fn export_to_clipboard_succeeds_on_desktop() {
        DiagnosticsCollector::default()
            .export_to_clipboard()
            .expect("clipboard export should succeed");
    }
}
