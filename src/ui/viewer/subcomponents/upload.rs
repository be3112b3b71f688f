// SPDX-License-Identifier: MPL-2.0
//! Upload handling: declared-type validation and handle ownership.
//!
//! ```text
//! idle    --valid file-->   loaded
//! idle    --invalid file--> error
//! loaded  --valid file-->   loaded   (previous handle released)
//! loaded  --invalid file--> error    (handle kept)
//! loaded  --reset-->        idle     (handle released)
//! error   --valid file-->   loaded
//! error   --reset-->        idle
//! ```

use super::error_state;
use crate::error::UploadError;
use crate::model::{ContentKind, ModelHandle, ModelReference, ModelStore, SelectedFile};

/// Where the upload flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Only observable inside a single `handle` call.
    Loading,
    Loaded,
    Error,
}

#[derive(Debug)]
pub struct State {
    store: ModelStore,
    phase: Phase,
    handle: Option<ModelHandle>,
    error: Option<error_state::State>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A file chosen by the user. `None` means the picker was cancelled.
    Select(Option<SelectedFile>),
    Reset,
    ErrorState(error_state::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Accepted {
        content_kind: ContentKind,
        file_name: String,
        /// Reference of the model this one replaced, already released.
        replaced: Option<ModelReference>,
    },
    Rejected {
        declared_type: Option<String>,
    },
    /// Reset released the current model.
    Released(ModelReference),
}

impl Default for State {
    fn default() -> Self {
        Self::new(ModelStore::new())
    }
}

impl State {
    #[must_use]
    pub fn new(store: ModelStore) -> Self {
        Self {
            store,
            phase: Phase::Idle,
            handle: None,
            error: None,
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Select(None) => Effect::None,
            Message::Select(Some(file)) => self.select(file),
            Message::Reset => self.reset(),
            Message::ErrorState(msg) => {
                if let Some(error) = self.error.as_mut() {
                    error.handle(msg);
                }
                Effect::None
            }
        }
    }

    fn select(&mut self, file: SelectedFile) -> Effect {
        self.phase = Phase::Loading;

        let Some(content_kind) = file.declared_type().and_then(ContentKind::from_declared_type)
        else {
            let declared_type = file.declared_type().map(str::to_string);
            self.error = Some(error_state::State::new(UploadError::UnsupportedFileType {
                declared_type: declared_type.clone(),
            }));
            self.phase = Phase::Error;
            return Effect::Rejected { declared_type };
        };

        self.error = None;
        let file_name = file.name().to_string();
        let handle = self.store.register(file, content_kind);
        let replaced = self.handle.replace(handle).map(ModelHandle::release);
        self.phase = Phase::Loaded;

        Effect::Accepted {
            content_kind,
            file_name,
            replaced,
        }
    }

    fn reset(&mut self) -> Effect {
        self.error = None;
        self.phase = Phase::Idle;
        match self.handle.take() {
            Some(handle) => Effect::Released(handle.release()),
            None => Effect::None,
        }
    }

    /// Releases the current model without touching anything else.
    pub fn teardown(&mut self) -> Option<ModelReference> {
        self.handle.take().map(ModelHandle::release)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn has_model(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn model_reference(&self) -> Option<&ModelReference> {
        self.handle.as_ref().map(ModelHandle::reference)
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.handle.as_ref().map(ModelHandle::file_name)
    }

    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &ModelStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, declared: Option<&str>) -> SelectedFile {
        SelectedFile::from_bytes(name, declared.map(str::to_string), vec![0_u8; 4])
    }

    #[test]
    fn starts_idle_without_model() {
        let state = State::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.model_reference().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn each_accepted_type_loads() {
        for kind in ContentKind::ALL {
            let mut state = State::default();
            let effect = state.handle(Message::Select(Some(file("m", Some(kind.mime_type())))));

            assert!(matches!(effect, Effect::Accepted { content_kind, .. } if content_kind == kind));
            assert_eq!(state.phase(), Phase::Loaded);
            assert!(state.model_reference().is_some());
            assert!(state.error().is_none());
        }
    }

    #[test]
    fn unsupported_type_sets_error_without_handle() {
        let mut state = State::default();
        let effect = state.handle(Message::Select(Some(file("a.png", Some("image/png")))));

        assert_eq!(
            effect,
            Effect::Rejected {
                declared_type: Some("image/png".into())
            }
        );
        assert_eq!(state.phase(), Phase::Error);
        assert!(state.model_reference().is_none());
        assert_eq!(state.store().live_count(), 0);
    }

    #[test]
    fn missing_declared_type_is_rejected() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("duck.glb", None))));
        assert_eq!(state.phase(), Phase::Error);
        assert!(!state.has_model());
    }

    #[test]
    fn cancelled_selection_changes_nothing() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Select(None)), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn rejection_keeps_the_loaded_model() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.glb", Some("model/gltf-binary")))));
        let before = state.model_reference().cloned();

        state.handle(Message::Select(Some(file("b.txt", Some("text/plain")))));

        assert_eq!(state.model_reference().cloned(), before);
        assert!(state.error().is_some());
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn replacement_releases_previous_handle() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.glb", Some("model/gltf-binary")))));
        let first = state.model_reference().cloned().expect("loaded");

        let effect = state.handle(Message::Select(Some(file("b.gltf", Some("model/gltf+json")))));

        assert!(matches!(effect, Effect::Accepted { replaced: Some(ref r), .. } if *r == first));
        assert!(!state.store().is_live(&first));
        assert_eq!(state.store().live_count(), 1);
        assert_eq!(state.file_name(), Some("b.gltf"));
    }

    #[test]
    fn success_after_error_clears_error() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.png", Some("image/png")))));
        state.handle(Message::Select(Some(file("a.glb", Some("model/gltf-binary")))));

        assert!(state.error().is_none());
        assert_eq!(state.phase(), Phase::Loaded);
    }

    #[test]
    fn reset_releases_and_returns_to_idle() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.glb", Some("model/gltf-binary")))));
        let reference = state.model_reference().cloned().expect("loaded");

        assert_eq!(state.handle(Message::Reset), Effect::Released(reference.clone()));
        assert!(!state.store().is_live(&reference));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn reset_clears_error_and_is_idempotent() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.png", Some("image/png")))));

        assert_eq!(state.handle(Message::Reset), Effect::None);
        assert!(state.error().is_none());
        assert_eq!(state.handle(Message::Reset), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn teardown_releases_handle_once() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.glb", Some("model/gltf-binary")))));

        assert!(state.teardown().is_some());
        assert!(state.teardown().is_none());
        assert_eq!(state.store().live_count(), 0);
    }

    #[test]
    fn error_details_toggle_is_routed() {
        let mut state = State::default();
        state.handle(Message::Select(Some(file("a.png", Some("image/png")))));
        state.handle(Message::ErrorState(error_state::Message::ToggleDetails));
        assert!(state.error().is_some_and(error_state::State::show_details));
    }
}
