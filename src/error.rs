// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Errors raised while accepting a user-selected model file.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The declared content type is not in the allow-list.
    UnsupportedFileType {
        /// Content type reported for the file, if any.
        declared_type: Option<String>,
    },
}

/// Fixed message shown when a file's declared type is rejected.
pub const UNSUPPORTED_FILE_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload a GLTF/GLB model.";

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::UnsupportedFileType { .. } => "error-unsupported-file-type",
        }
    }

    /// Technical details suitable for the collapsible error section.
    pub fn details(&self) -> String {
        match self {
            UploadError::UnsupportedFileType {
                declared_type: Some(declared),
            } => format!("declared type: {}", declared),
            UploadError::UnsupportedFileType {
                declared_type: None,
            } => "declared type: (none)".to_string(),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedFileType { .. } => {
                write!(f, "{}", UNSUPPORTED_FILE_TYPE_MESSAGE)
            }
        }
    }
}

impl std::error::Error for UploadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
