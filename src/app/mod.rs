// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the matting widget to the processing context and
//! the engine, and translates widget effects into side effects like dialog
//! tasks, config persistence, or the processing pipeline. Policy decisions
//! (window size, stage ordering, persistence format) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, MattingOutcome, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::matting::{engine, Context, Source};
use crate::media;
use crate::ui;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the widget, the processing context,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Background-removal state consumed by the widget.
    context: Context,
    /// Presentation state owned by the widget.
    widget: ui::matting::State,
    /// Shared matting engine; the session is loaded once and reused.
    engine: engine::SharedMattingManager,
    /// Model lifecycle status, mirrored from the download pipeline.
    model_status: engine::ModelStatus,
    theme_mode: ThemeMode,
    config: config::Config,
    /// Persisted application state (last open/save directories).
    persisted: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("is_processing", &self.context.is_processing())
            .field("has_processed_image", &self.context.has_processed_image())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    let icon = crate::icon::load_window_icon();

    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
            screen: Screen::Matting,
            context: Context::new(),
            widget: ui::matting::State::new(),
            engine: engine::create_shared_manager(),
            model_status: engine::ModelStatus::default(),
            theme_mode: ThemeMode::System,
            config: config::Config::default(),
            persisted: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the thumbnail fetches,
    /// plus processing of an image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (persisted, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            model_status: if engine::is_model_downloaded() {
                engine::ModelStatus::Ready
            } else {
                engine::ModelStatus::NotDownloaded
            },
            config,
            persisted,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let mut tasks = vec![update::fetch_sample_thumbnails()];

        if let Some(path_str) = flags.file_path {
            let path = std::path::PathBuf::from(&path_str);
            if media::is_supported_image(&path) {
                tasks.push(update::start_processing(&mut app, Source::Path(path)));
            } else {
                app.notifications
                    .push(notifications::Notification::warning(
                        "notification-unsupported-file",
                    ));
            }
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self
            .context
            .current_source()
            .and_then(Source::display_name)
        {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_stopwatch_subscription(self.context.is_processing()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Matting(widget_message) => {
                update::handle_widget_message(self, widget_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(self, settings_message)
            }
            Message::SwitchScreen(target) => {
                self.screen = target;
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick drives notification auto-dismiss.
                self.notifications.tick();
                Task::none()
            }
            Message::SourceFetched(result) => update::handle_source_fetched(self, result),
            Message::ModelDownloadProgress(progress) => {
                if matches!(self.model_status, engine::ModelStatus::Downloading { .. }) {
                    self.model_status = engine::ModelStatus::Downloading { progress };
                }
                Task::none()
            }
            Message::ModelDownloadCompleted(result) => {
                update::handle_model_download_completed(self, result)
            }
            Message::MattingCompleted(result) => update::handle_matting_completed(self, result),
            Message::UploadDialogResult(path) => update::handle_upload_dialog_result(self, path),
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(self, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
