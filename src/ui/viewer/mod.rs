// SPDX-License-Identifier: MPL-2.0
//! The model viewer: upload card, preview, controls and status.
//!
//! ```text
//! ┌──────────────────────────────┐ ┌──────────────┐
//! │ upload_zone                  │ │ controls     │
//! ├──────────────────────────────┤ ├──────────────┤
//! │ preview                      │ │ status       │
//! └──────────────────────────────┘ └──────────────┘
//! ```
//!
//! The right column is drawn through the [`capabilities`] traits and is
//! hidden with `[viewer] show_controls = false`.

pub mod capabilities;
pub mod component;
pub mod controls_panel;
pub mod preview;
pub mod status;
pub mod subcomponents;
pub mod upload_zone;
