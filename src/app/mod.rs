// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the generator form to the encoder, the file system
//! and the clipboard, and owns everything that outlives a single form
//! interaction: localization, theme, notifications and diagnostics.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ClipboardWriter, ImageSaver, QrEncoder};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ArboardClipboard, FsImageSaver, QrCodeEncoder};
use crate::ui::generator;
use crate::ui::layout::Breakpoint;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{AppTheme, ThemeMode};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Adapters behind the application ports.
#[derive(Clone)]
pub struct Ports {
    pub encoder: Arc<dyn QrEncoder>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub saver: Arc<dyn ImageSaver>,
}

impl Ports {
    /// `qrcode` encoder, `arboard` clipboard and file system saver.
    #[must_use]
    pub fn production() -> Self {
        Self {
            encoder: Arc::new(QrCodeEncoder::new()),
            clipboard: Arc::new(ArboardClipboard::new()),
            saver: Arc::new(FsImageSaver::new()),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    generator: generator::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    ports: Ports,
    config: Config,
    /// Where settings are saved; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    breakpoint: Breakpoint,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("breakpoint", &self.breakpoint)
            .field("has_preview", &self.generator.preview().is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning, None, Ports::production())
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// A warning key from [`config::load`] is shown as a toast. When
    /// `flags.url` is set, generation starts right away.
    pub fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
        ports: Ports,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        diagnostics.handle().log_state(AppStateEvent::Started {
            version: env!("CARGO_PKG_VERSION").to_string(),
            locale: i18n.current_locale().to_string(),
        });

        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            generator: generator::State::new(config.generator.margin()),
            notifications,
            diagnostics,
            ports,
            config,
            config_dir,
            breakpoint: Breakpoint::from_width(config::WINDOW_DEFAULT_WIDTH),
        };

        let task = match flags.url {
            Some(url) => {
                app.generator.update(generator::Message::UrlChanged(url));
                app.update(Message::Generator(generator::Message::Submit))
            }
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    /// Routes `message` and returns the follow-up work.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            generator: &self.generator,
            notifications: &self.notifications,
            breakpoint: self.breakpoint,
        })
    }

    #[must_use]
    pub fn generator(&self) -> &generator::State {
        &self.generator
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}
