// SPDX-License-Identifier: MPL-2.0
//! `model_lens` is a lightweight 3D model viewer shell built with the Iced GUI
//! framework.
//!
//! It accepts glTF/GLB files by file dialog, drag and drop or command line,
//! validates their declared content type and exposes playback, rotation and
//! reset controls around a preview area. The UI is localized with Fluent and
//! user activity can be exported as a JSON diagnostics report.

#![doc(html_root_url = "https://docs.rs/model_lens/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod model;
pub mod ui;
