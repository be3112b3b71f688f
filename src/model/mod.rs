// SPDX-License-Identifier: MPL-2.0
//! Uploaded model files and the handles that stand in for them.
//!
//! This module knows nothing about 3D formats. It classifies a selected file
//! by its declared content type and hands out opaque, single-owner handles
//! that the viewer keeps while a model is loaded.

pub mod content_kind;
pub mod selected_file;
pub mod store;

pub use content_kind::{declared_type_for_path, ContentKind, ACCEPTED_EXTENSIONS};
pub use selected_file::{FileSource, SelectedFile};
pub use store::{ModelHandle, ModelReference, ModelStore};
