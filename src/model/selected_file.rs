// SPDX-License-Identifier: MPL-2.0
//! A file chosen by the user, before validation.

use super::content_kind::declared_type_for_path;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a selected file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// File on disk; bytes are read by whoever resolves the handle.
    Path(PathBuf),
    /// Bytes already in memory.
    Bytes(Arc<[u8]>),
}

/// A user-selected file together with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    declared_type: Option<String>,
    source: FileSource,
}

impl SelectedFile {
    /// Builds a selection from a path, declaring its type from the extension.
    ///
    /// The file system is not touched.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let declared_type = declared_type_for_path(&path).map(str::to_string);
        Self {
            name,
            declared_type,
            source: FileSource::Path(path),
        }
    }

    /// Builds a selection from in-memory bytes.
    #[must_use]
    pub fn from_bytes(
        name: impl Into<String>,
        declared_type: Option<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            source: FileSource::Bytes(bytes.into()),
        }
    }

    /// Replaces the declared type (e.g. from `--content-type`).
    #[must_use]
    pub fn with_declared_type(mut self, declared_type: Option<String>) -> Self {
        self.declared_type = declared_type;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    #[must_use]
    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Path on disk, if the selection came from one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Bytes(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_uses_file_name_and_extension() {
        let file = SelectedFile::from_path("/models/Duck.glb");
        assert_eq!(file.name(), "Duck.glb");
        assert_eq!(file.declared_type(), Some("model/gltf-binary"));
        assert_eq!(file.path(), Some(Path::new("/models/Duck.glb")));
    }

    #[test]
    fn from_path_without_extension_has_no_declared_type() {
        let file = SelectedFile::from_path("/models/Duck");
        assert_eq!(file.declared_type(), None);
    }

    #[test]
    fn declared_type_can_be_overridden() {
        let file = SelectedFile::from_path("/models/Duck.glb")
            .with_declared_type(Some("application/zip".into()));
        assert_eq!(file.declared_type(), Some("application/zip"));

        let cleared = file.with_declared_type(None);
        assert_eq!(cleared.declared_type(), None);
    }

    #[test]
    fn from_bytes_keeps_bytes_in_memory() {
        let file = SelectedFile::from_bytes(
            "box.gltf",
            Some("model/gltf+json".into()),
            b"{}".to_vec(),
        );
        assert!(file.path().is_none());
        match file.source() {
            FileSource::Bytes(bytes) => assert_eq!(&bytes[..], b"{}"),
            FileSource::Path(_) => panic!("expected in-memory source"),
        }
    }
}
