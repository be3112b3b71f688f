// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Whether the controls and status panels are shown.
pub const DEFAULT_SHOW_CONTROLS: bool = true;

/// Whether auto-rotation starts enabled for a freshly created viewer.
pub const DEFAULT_AUTO_ROTATE: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

const _: () = {
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
