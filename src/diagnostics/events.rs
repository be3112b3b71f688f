// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Open the native file dialog.
    OpenFileDialog,

    /// Select a model file.
    SelectFile {
        /// Where the selection came from (`file_dialog`, `drag_drop`, `cli`).
        source: SelectionSource,
    },

    /// Reset the viewer.
    ResetViewer,

    /// Toggle play/pause.
    TogglePlayback,

    /// Toggle auto-rotation.
    ToggleAutoRotate,

    /// Export the diagnostics report.
    ExportDiagnostics,
}

/// Origin of a file selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    FileDialog,
    DragDrop,
    Cli,
}

/// Viewer state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// A file passed validation and now has a live reference.
    ModelLoaded {
        /// MIME type of the accepted file.
        content_type: String,
    },
    /// A file was refused by the allow-list.
    ModelRejected {
        #[serde(skip_serializing_if = "Option::is_none")]
        declared_type: Option<String>,
    },
    /// A live reference was released (replacement, reset, teardown).
    ModelReleased,
    /// The viewer was torn down.
    ViewerClosed,
}

/// A single timestamped event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
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

/// Category and payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Extra context such as a file name.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    AppState {
        state: AppStateEvent,
    },

    /// Non-critical issue.
    Warning {
        message: String,
    },

    /// Failed operation.
    Error {
        message: String,
    },
}
