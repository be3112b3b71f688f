// SPDX-License-Identifier: MPL-2.0
//! Accepted content kinds and declared-type detection.

use std::path::Path;

/// Extensions offered by the open file dialog.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["gltf", "glb"];

/// Content kinds accepted by the upload handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Binary glTF container (`.glb`).
    GltfBinary,
    /// JSON glTF document (`.gltf`).
    GltfJson,
    /// Untyped binary payload.
    OctetStream,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::GltfBinary,
        ContentKind::GltfJson,
        ContentKind::OctetStream,
    ];

    /// MIME type matched against the declared type of a file.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ContentKind::GltfBinary => "model/gltf-binary",
            ContentKind::GltfJson => "model/gltf+json",
            ContentKind::OctetStream => "application/octet-stream",
        }
    }

    /// Classifies a declared content type.
    ///
    /// The comparison is exact: no trimming, no case folding, no parameters.
    #[must_use]
    pub fn from_declared_type(declared: &str) -> Option<Self> {
        match declared {
            "model/gltf-binary" => Some(ContentKind::GltfBinary),
            "model/gltf+json" => Some(ContentKind::GltfJson),
            "application/octet-stream" => Some(ContentKind::OctetStream),
            _ => None,
        }
    }
}

/// Returns the content type a desktop file manager would report for `path`.
///
/// Only the extension is consulted. Unknown extensions yield `None`, which
/// the upload handler treats like an empty declared type.
#[must_use]
pub fn declared_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "glb" => Some("model/gltf-binary"),
        "gltf" => Some("model/gltf+json"),
        "bin" => Some("application/octet-stream"),
        "obj" => Some("model/obj"),
        "stl" => Some("model/stl"),
        "ply" => Some("model/ply"),
        "dae" => Some("model/vnd.collada+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_mime_type() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::from_declared_type(kind.mime_type()), Some(kind));
        }
    }

    #[test]
    fn unknown_declared_types_are_rejected() {
        for declared in ["", "image/png", "model/obj", "text/plain", "application/zip"] {
            assert_eq!(ContentKind::from_declared_type(declared), None, "{declared}");
        }
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(ContentKind::from_declared_type("Model/GLTF-Binary"), None);
        assert_eq!(ContentKind::from_declared_type(" model/gltf-binary"), None);
        assert_eq!(
            ContentKind::from_declared_type("application/octet-stream; charset=binary"),
            None
        );
    }

    #[test]
    fn gltf_extensions_map_to_accepted_types() {
        assert_eq!(
            declared_type_for_path(Path::new("/tmp/duck.glb")),
            Some("model/gltf-binary")
        );
        assert_eq!(
            declared_type_for_path(Path::new("scene.GLTF")),
            Some("model/gltf+json")
        );
    }

    #[test]
    fn other_model_formats_map_to_rejected_types() {
        let declared = declared_type_for_path(Path::new("part.stl")).unwrap();
        assert_eq!(ContentKind::from_declared_type(declared), None);
        let declared = declared_type_for_path(Path::new("mesh.obj")).unwrap();
        assert_eq!(ContentKind::from_declared_type(declared), None);
    }

    #[test]
    fn missing_or_unknown_extension_has_no_declared_type() {
        assert_eq!(declared_type_for_path(Path::new("README")), None);
        assert_eq!(declared_type_for_path(Path::new("model.fbx")), None);
    }

    #[test]
    fn accepted_extensions_declare_accepted_types() {
        for ext in ACCEPTED_EXTENSIONS {
            let path = format!("model.{ext}");
            let declared = declared_type_for_path(Path::new(&path)).unwrap();
            assert!(ContentKind::from_declared_type(declared).is_some());
        }
    }
}
