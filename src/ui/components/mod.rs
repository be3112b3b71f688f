// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - inline error card with severity icon and
//!   expandable technical details

pub mod error_display;
