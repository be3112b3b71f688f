// SPDX-License-Identifier: MPL-2.0
//! What the side panels need from the viewer.
//!
//! The controls and status panels only see these traits, so they can be
//! hidden by configuration or pointed at a future renderer without
//! touching the upload flow.

use crate::model::ModelReference;

/// Whether a model is currently available to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Loaded,
    NotLoaded,
}

impl ModelStatus {
    /// i18n key of the status line.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ModelStatus::Loaded => "status-loaded",
            ModelStatus::NotLoaded => "status-not-loaded",
        }
    }
}

pub trait PlaybackControls {
    fn is_playing(&self) -> bool;
    fn auto_rotate(&self) -> bool;
    /// `false` while there is nothing to play or rotate.
    fn controls_enabled(&self) -> bool;
    fn model_reference(&self) -> Option<&ModelReference>;
}

pub trait StatusIndicator {
    fn model_status(&self) -> ModelStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keys_differ() {
        assert_ne!(
            ModelStatus::Loaded.i18n_key(),
            ModelStatus::NotLoaded.i18n_key()
        );
    }
}
