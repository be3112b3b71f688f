// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::viewer::component;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog; `None` when cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file (or directory) was dropped on the window.
    FileDropped(PathBuf),
    /// Window close was requested (close button, Alt+F4).
    WindowCloseRequested(iced::window::Id),
    /// Drives notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory containing extra Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Overrides the directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Overrides the directory diagnostics reports are written to.
    pub data_dir: Option<String>,
    /// Declared content type for `file_path`, instead of the one derived
    /// from its extension.
    pub content_type: Option<String>,
    /// Model to select at startup.
    pub file_path: Option<String>,
}
