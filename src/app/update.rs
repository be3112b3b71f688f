// SPDX-License-Identifier: MPL-2.0
//! Update handlers for `App` messages.

use super::{paths, Message};
use crate::diagnostics::{DiagnosticsCollector, SelectionSource};
use crate::i18n::fluent::I18n;
use crate::model::{SelectedFile, ACCEPTED_EXTENSIONS};
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::component;
use iced::Task;
use std::path::PathBuf;

/// Mutable borrows of the `App` fields the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a mut component::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub data_dir: Option<&'a PathBuf>,
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    match ctx.viewer.handle_message(message) {
        component::Effect::None => Task::none(),
        component::Effect::OpenFileDialog => open_file_dialog(ctx.i18n.tr("file-dialog-filter")),
        component::Effect::ExportDiagnostics => {
            export_diagnostics(ctx);
            Task::none()
        }
    }
}

fn open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, ACCEPTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    select_path(ctx, path, SelectionSource::FileDialog)
}

/// Dropped directories have no declared type and are rejected like any
/// other unsupported file, whatever their name.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    select_path(ctx, Some(path), SelectionSource::DragDrop)
}

fn select_path(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
    source: SelectionSource,
) -> Task<Message> {
    handle_viewer_message(
        ctx,
        component::Message::FileSelected {
            file: path.map(selected_file_for_path),
            source,
        },
    )
}

/// Directories get no declared type, so a folder named `x.glb` is rejected.
pub(super) fn selected_file_for_path(path: PathBuf) -> SelectedFile {
    if path.is_dir() {
        SelectedFile::from_path(path).with_declared_type(None)
    } else {
        SelectedFile::from_path(path)
    }
}

/// Writes the report to `<data dir>/diagnostics/` and reports the outcome
/// with a toast.
fn export_diagnostics(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.process_pending();
    let dir = paths::get_diagnostics_dir_with_override(ctx.data_dir.cloned());

    match ctx.diagnostics.export_to_dir(dir) {
        Ok(path) => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            ctx.notifications.push(
                Notification::success("notification-diagnostics-exported")
                    .with_arg("file", file_name),
            );
        }
        Err(err) => {
            ctx.notifications.push(
                Notification::error("notification-diagnostics-export-error")
                    .with_arg("error", err.to_string()),
            );
        }
    }
}

/// Releases the model before the window goes away.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.viewer.teardown();
    ctx.diagnostics.process_pending();
    iced::exit()
}
