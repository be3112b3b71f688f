// SPDX-License-Identifier: MPL-2.0
//! Viewer component: upload handling, controls and keyboard shortcuts.
//!
//! All transitions happen synchronously inside [`State::handle_message`].
//! The only thing the component cannot do itself is open the native file
//! dialog, which it requests from the app through [`Effect::OpenFileDialog`].

use super::capabilities::{ModelStatus, PlaybackControls, StatusIndicator};
use super::subcomponents::{error_state, playback, rotation, upload};
use super::{controls_panel, preview, status, upload_zone};
use crate::app::config::{ViewerConfig, DEFAULT_AUTO_ROTATE, DEFAULT_SHOW_CONTROLS};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, SelectionSource, UserAction};
use crate::error::UploadError;
use crate::i18n::fluent::I18n;
use crate::model::{ModelReference, ModelStore, SelectedFile};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{Column, Container, Row};
use iced::{event, keyboard, window, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Click on the drop zone or one of the upload buttons.
    OpenFileRequested,
    FileSelected {
        file: Option<SelectedFile>,
        source: SelectionSource,
    },
    Reset,
    TogglePlayback,
    ToggleAutoRotate,
    ToggleErrorDetails,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Requests the viewer cannot fulfil on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
    ExportDiagnostics,
}

#[derive(Debug)]
pub struct State {
    upload: upload::State,
    playback: playback::State,
    rotation: rotation::State,
    show_controls: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        Self::with_store(ModelStore::new(), config)
    }

    /// Uses `store` for model references, e.g. to observe releases in tests.
    #[must_use]
    pub fn with_store(store: ModelStore, config: &ViewerConfig) -> Self {
        Self {
            upload: upload::State::new(store),
            playback: playback::State::default(),
            rotation: rotation::State::new(config.auto_rotate.unwrap_or(DEFAULT_AUTO_ROTATE)),
            show_controls: config.show_controls.unwrap_or(DEFAULT_SHOW_CONTROLS),
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenFileRequested => {
                self.log_action(UserAction::OpenFileDialog, None);
                Effect::OpenFileDialog
            }
            Message::FileSelected { file, source } => {
                self.select(file, source);
                Effect::None
            }
            Message::Reset => {
                self.reset();
                Effect::None
            }
            Message::TogglePlayback => {
                if self.upload.has_model() {
                    self.log_action(UserAction::TogglePlayback, None);
                    self.playback.handle(playback::Message::Toggle);
                }
                Effect::None
            }
            Message::ToggleAutoRotate => {
                if self.upload.has_model() {
                    self.log_action(UserAction::ToggleAutoRotate, None);
                    self.rotation.handle(rotation::Message::Toggle);
                }
                Effect::None
            }
            Message::ToggleErrorDetails => {
                self.upload.handle(upload::Message::ErrorState(
                    error_state::Message::ToggleDetails,
                ));
                Effect::None
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(&event),
        }
    }

    fn select(&mut self, file: Option<SelectedFile>, source: SelectionSource) {
        if let Some(file) = &file {
            self.log_action(
                UserAction::SelectFile { source },
                Some(file.name().to_string()),
            );
        }

        match self.upload.handle(upload::Message::Select(file)) {
            upload::Effect::Accepted {
                content_kind,
                replaced,
                ..
            } => {
                if replaced.is_some() {
                    self.log_state(AppStateEvent::ModelReleased);
                }
                self.log_state(AppStateEvent::ModelLoaded {
                    content_type: content_kind.mime_type().to_string(),
                });
            }
            upload::Effect::Rejected { declared_type } => {
                self.log_state(AppStateEvent::ModelRejected { declared_type });
            }
            upload::Effect::Released(_) | upload::Effect::None => {}
        }
    }

    fn reset(&mut self) {
        self.log_action(UserAction::ResetViewer, None);
        if let upload::Effect::Released(_) = self.upload.handle(upload::Message::Reset) {
            self.log_state(AppStateEvent::ModelReleased);
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Effect::None;
        };

        match key.as_ref() {
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case("o") && modifiers.command() => {
                self.handle_message(Message::OpenFileRequested)
            }
            keyboard::Key::Character(c)
                if c.eq_ignore_ascii_case("d") && modifiers.command() && modifiers.shift() =>
            {
                self.log_action(UserAction::ExportDiagnostics, None);
                Effect::ExportDiagnostics
            }
            keyboard::Key::Character(c)
                if c.eq_ignore_ascii_case("r") && !modifiers.command() && !modifiers.alt() =>
            {
                self.handle_message(Message::ToggleAutoRotate)
            }
            keyboard::Key::Named(keyboard::key::Named::Space) => {
                self.handle_message(Message::TogglePlayback)
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.handle_message(Message::Reset)
            }
            _ => Effect::None,
        }
    }

    /// Releases the current model. Called when the window is closing.
    pub fn teardown(&mut self) {
        if self.upload.teardown().is_some() {
            self.log_state(AppStateEvent::ModelReleased);
        }
        self.log_state(AppStateEvent::ViewerClosed);
    }

    fn log_action(&self, action: UserAction, details: Option<String>) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action_with_details(action, details);
        }
    }

    fn log_state(&self, state: AppStateEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(state);
        }
    }

    #[must_use]
    pub fn phase(&self) -> upload::Phase {
        self.upload.phase()
    }

    #[must_use]
    pub fn error(&self) -> Option<&UploadError> {
        self.upload.error().map(error_state::State::error)
    }

    #[must_use]
    pub fn error_details_visible(&self) -> bool {
        self.upload
            .error()
            .is_some_and(error_state::State::show_details)
    }

    /// File name of the loaded model, for the window title.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.upload.file_name()
    }

    #[must_use]
    pub fn store(&self) -> &ModelStore {
        self.upload.store()
    }

    #[must_use]
    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let main_column = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(upload_zone::view(i18n))
            .push(preview::view(preview::ViewContext {
                i18n,
                error: self.upload.error(),
                loaded: self.upload.file_name(),
            }));

        if !self.show_controls {
            return main_column.into();
        }

        let side_column = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fixed(sizing::SIDE_PANEL_WIDTH))
            .push(controls_panel::view(i18n, self))
            .push(status::view(i18n, self));

        Container::new(
            Row::new()
                .spacing(spacing::LG)
                .push(main_column)
                .push(side_column),
        )
        .width(Length::Fill)
        .into()
    }
}

impl PlaybackControls for State {
    fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    fn auto_rotate(&self) -> bool {
        self.rotation.auto_rotate()
    }

    fn controls_enabled(&self) -> bool {
        self.upload.has_model()
    }

    fn model_reference(&self) -> Option<&ModelReference> {
        self.upload.model_reference()
    }
}

impl StatusIndicator for State {
    fn model_status(&self) -> ModelStatus {
        if self.upload.has_model() {
            ModelStatus::Loaded
        } else {
            ModelStatus::NotLoaded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::error::UNSUPPORTED_FILE_TYPE_MESSAGE;
    use crate::ui::viewer::subcomponents::upload::Phase;

    fn glb(name: &str) -> SelectedFile {
        SelectedFile::from_bytes(name, Some("model/gltf-binary".into()), vec![0_u8; 8])
    }

    fn select(state: &mut State, file: SelectedFile) -> Effect {
        state.handle_message(Message::FileSelected {
            file: Some(file),
            source: SelectionSource::FileDialog,
        })
    }

    fn key_press(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: key.clone(),
                modified_key: key.clone(),
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Space),
                location: keyboard::Location::Standard,
                modifiers,
                text: None,
                repeat: false,
            }),
        }
    }

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn default_state_matches_viewer_defaults() {
        let state = State::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_playing());
        assert!(state.auto_rotate());
        assert!(state.show_controls());
        assert_eq!(state.model_status(), ModelStatus::NotLoaded);
        assert!(!state.controls_enabled());
    }

    #[test]
    fn config_sets_initial_flags() {
        let state = State::new(&ViewerConfig {
            show_controls: Some(false),
            auto_rotate: Some(false),
        });
        assert!(!state.show_controls());
        assert!(!state.auto_rotate());
    }

    #[test]
    fn valid_upload_publishes_reference() {
        let mut state = State::default();
        select(&mut state, glb("duck.glb"));

        assert!(state.model_reference().is_some());
        assert!(state.error().is_none());
        assert_eq!(state.model_status(), ModelStatus::Loaded);
        assert_eq!(state.file_name(), Some("duck.glb"));
    }

    #[test]
    fn invalid_upload_shows_fixed_message() {
        let mut state = State::default();
        select(
            &mut state,
            SelectedFile::from_bytes("notes.txt", Some("text/plain".into()), vec![]),
        );

        let error = state.error().expect("error should be set");
        assert_eq!(error.to_string(), UNSUPPORTED_FILE_TYPE_MESSAGE);
        assert!(state.model_reference().is_none());
    }

    #[test]
    fn toggles_are_ignored_without_model() {
        let mut state = State::default();
        state.handle_message(Message::TogglePlayback);
        state.handle_message(Message::ToggleAutoRotate);
        assert!(!state.is_playing());
        assert!(state.auto_rotate());
    }

    #[test]
    fn toggling_auto_rotate_twice_restores_it() {
        let mut state = State::default();
        select(&mut state, glb("a.glb"));

        state.handle_message(Message::ToggleAutoRotate);
        assert!(!state.auto_rotate());
        state.handle_message(Message::ToggleAutoRotate);
        assert!(state.auto_rotate());
    }

    #[test]
    fn reset_keeps_playback_flags() {
        let mut state = State::default();
        select(&mut state, glb("a.glb"));
        state.handle_message(Message::TogglePlayback);

        state.handle_message(Message::Reset);

        assert!(state.model_reference().is_none());
        assert!(state.is_playing());
    }

    #[test]
    fn reset_releases_reference_in_store() {
        let store = ModelStore::new();
        let mut state = State::with_store(store.clone(), &ViewerConfig::default());
        select(&mut state, glb("a.glb"));
        let reference = state.model_reference().cloned().expect("loaded");

        state.handle_message(Message::Reset);

        assert!(!store.is_live(&reference));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn teardown_releases_handle() {
        let store = ModelStore::new();
        let mut state = State::with_store(store.clone(), &ViewerConfig::default());
        select(&mut state, glb("a.glb"));

        state.teardown();

        assert_eq!(store.live_count(), 0);
        assert_eq!(store.released_count(), 1);
    }

    #[test]
    fn dropping_viewer_releases_handle() {
        let store = ModelStore::new();
        let mut state = State::with_store(store.clone(), &ViewerConfig::default());
        select(&mut state, glb("a.glb"));
        drop(state);

        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn open_file_requested_asks_for_dialog() {
        let mut state = State::default();
        assert_eq!(
            state.handle_message(Message::OpenFileRequested),
            Effect::OpenFileDialog
        );
    }

    #[test]
    fn error_details_toggle() {
        let mut state = State::default();
        select(
            &mut state,
            SelectedFile::from_bytes("a.png", Some("image/png".into()), vec![]),
        );
        state.handle_message(Message::ToggleErrorDetails);
        assert!(state.error_details_visible());
    }

    #[test]
    fn keyboard_shortcuts() {
        let mut state = State::default();

        assert_eq!(
            state.handle_message(key_press(character("o"), keyboard::Modifiers::COMMAND)),
            Effect::OpenFileDialog
        );
        assert_eq!(
            state.handle_message(key_press(
                character("D"),
                keyboard::Modifiers::COMMAND | keyboard::Modifiers::SHIFT
            )),
            Effect::ExportDiagnostics
        );

        select(&mut state, glb("a.glb"));
        state.handle_message(key_press(
            keyboard::Key::Named(keyboard::key::Named::Space),
            keyboard::Modifiers::empty(),
        ));
        assert!(state.is_playing());

        state.handle_message(key_press(character("r"), keyboard::Modifiers::empty()));
        assert!(!state.auto_rotate());

        state.handle_message(key_press(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        ));
        assert!(state.model_reference().is_none());
    }

    #[test]
    fn plain_o_does_nothing() {
        let mut state = State::default();
        assert_eq!(
            state.handle_message(key_press(character("o"), keyboard::Modifiers::empty())),
            Effect::None
        );
    }

    #[test]
    fn transitions_are_logged() {
        let mut collector = DiagnosticsCollector::default();
        let mut state = State::default();
        state.set_diagnostics(collector.handle());

        select(&mut state, glb("a.glb"));
        select(&mut state, glb("b.glb"));
        state.handle_message(Message::Reset);
        collector.process_pending();

        let states: Vec<_> = collector
            .iter()
            .filter_map(|e| match &e.kind {
                DiagnosticEventKind::AppState { state } => Some(state.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            states,
            vec![
                AppStateEvent::ModelLoaded {
                    content_type: "model/gltf-binary".into()
                },
                AppStateEvent::ModelReleased,
                AppStateEvent::ModelLoaded {
                    content_type: "model/gltf-binary".into()
                },
                AppStateEvent::ModelReleased,
            ]
        );
    }

    #[test]
    fn view_renders_every_phase() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _ = state.view(&i18n);

        select(&mut state, glb("a.glb"));
        let _ = state.view(&i18n);

        select(
            &mut state,
            SelectedFile::from_bytes("a.png", Some("image/png".into()), vec![]),
        );
        let _ = state.view(&i18n);
    }
}
