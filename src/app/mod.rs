// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the viewer to configuration, localization,
//! notifications and diagnostics, and turns viewer effects into tasks
//! (file dialog, report export, exit).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, SelectionSource};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// `--data-dir`, used for diagnostics export.
    data_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer_phase", &self.viewer.phase())
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Close requests are routed through `update` so the model can be
/// released before exit.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            viewer: component::State::default(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            data_dir: None,
        }
    }
}

impl App {
    /// Loads preferences, then selects the CLI file (if any) synchronously.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let capacity = BufferCapacity::new(
            config
                .diagnostics
                .buffer_capacity
                .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        );
        let diagnostics = DiagnosticsCollector::new(capacity);

        let mut viewer = component::State::new(&config.viewer);
        viewer.set_diagnostics(diagnostics.handle());

        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let mut app = App {
            i18n,
            viewer,
            theme_mode: config.general.theme_mode,
            notifications,
            diagnostics,
            data_dir: flags.data_dir.map(PathBuf::from),
        };

        let task = match flags.file_path.map(PathBuf::from) {
            Some(path) => {
                let is_dir = path.is_dir();
                let mut file = update::selected_file_for_path(path);
                if !is_dir && flags.content_type.is_some() {
                    file = file.with_declared_type(flags.content_type);
                }
                app.update(Message::Viewer(component::Message::FileSelected {
                    file: Some(file),
                    source: SelectionSource::Cli,
                }))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.viewer.file_name() {
            Some(name) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("name", name)]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            viewer: &mut self.viewer,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            data_dir: self.data_dir.as_ref(),
        };

        let task = match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::WindowCloseRequested(_) => update::handle_window_close(&mut ctx),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            notifications: &self.notifications,
        })
    }
}
