// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components log through a cloneable [`DiagnosticsHandle`]; the app drains
//! the channel into the bounded buffer on every update.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{write_atomic, write_report_to_dir, ExportError};
use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ReportMetadata, SerializableEvent, SystemInfo, UserAction,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block; events are dropped when the channel
/// is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Central collector for diagnostic events.
///
/// Events arrive through a channel and are stored in a memory-bounded
/// circular buffer; the oldest events are evicted at capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Kept to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("collection_started_at_utc", &self.collection_started_at_utc)
            .finish_non_exhaustive()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

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

    /// Creates a handle for sending events to this collector.
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

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
                details: None,
            }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> std::time::Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

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
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, SystemInfo::collect(), events)
    }

    /// Writes the report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if file operations fail and
    /// `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    /// Writes the report into `dir` under a timestamped file name.
    ///
    /// # Errors
    ///
    /// Same as [`Self::export_to_file`]; the directory is created if needed.
    pub fn export_to_dir(&self, dir: Option<PathBuf>) -> Result<PathBuf, ExportError> {
        let dir = dir.ok_or(ExportError::NoExportDirectory)?;
        let json = self.export_json()?;
        write_report_to_dir(&dir, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SelectionSource;
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::OpenFileDialog);
        handle.log_state(AppStateEvent::ModelReleased);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn events_keep_logging_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning("first");
        handle.log_error("second");
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "first".into()
                },
                DiagnosticEventKind::Error {
                    message: "second".into()
                },
            ]
        );
    }

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let capacity = BufferCapacity::new(0);
        let mut collector = DiagnosticsCollector::new(capacity);
        for _ in 0..capacity.value() + 5 {
            collector.log_action(UserAction::TogglePlayback);
        }
        assert_eq!(collector.len(), capacity.value());
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY + 10 {
            handle.log_action(UserAction::ToggleAutoRotate);
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn handle_outliving_collector_does_not_panic() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        drop(collector);
        handle.log_warning("nobody listening");
    }

    #[test]
    fn export_json_contains_logged_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_action_with_details(
            UserAction::SelectFile {
                source: SelectionSource::FileDialog,
            },
            Some("duck.glb".into()),
        );
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("select_file"));
        assert!(json.contains("duck.glb"));
        assert!(json.contains("\"event_count\": 1"));
    }

    #[test]
    fn export_to_file_writes_report() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::ResetViewer);

        let written = collector.export_to_file(&path).expect("export");

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("reset_viewer"));
    }

    #[test]
    fn export_to_dir_without_directory_fails() {
        let collector = DiagnosticsCollector::default();
        assert!(matches!(
            collector.export_to_dir(None),
            Err(ExportError::NoExportDirectory)
        ));
    }

    #[test]
    fn export_to_dir_uses_timestamped_name() {
        let dir = tempdir().expect("temp dir");
        let collector = DiagnosticsCollector::default();

        let path = collector
            .export_to_dir(Some(dir.path().join("diagnostics")))
            .expect("export");

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        assert!(name.starts_with("model_lens_diagnostics_"));
    }
}
