// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Upload zone, preview, controls and status
//! - [`notifications`] - Toast notifications for user feedback
//! - [`components`] - Reusable widgets (error display)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod viewer;
