// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log with JSON export.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cloneable, non-blocking sender used by components
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticReport`]: what gets written to `<data dir>/diagnostics/`
//!
//! Events record user actions, viewer state transitions, warnings and
//! errors. File contents are never logged, only file names.

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, SelectionSource, UserAction,
};
pub use export::{generate_default_filename, write_atomic, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent, SystemInfo};
