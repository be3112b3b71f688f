// SPDX-License-Identifier: MPL-2.0
//! Nested sub-components of the viewer.
//!
//! Each has its own State, Message and `handle()`; `component.rs` routes
//! messages to them and turns their effects into diagnostics and app
//! effects.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── upload      - validation, handle ownership, phase
//!     │   └── error_state - rejected upload + details toggle
//!     ├── playback    - play/pause flag
//!     └── rotation    - auto-rotate flag
//! ```

pub mod error_state;
pub mod playback;
pub mod rotation;
pub mod upload;
