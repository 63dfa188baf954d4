// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::generator;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::Size;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Generator(generator::Message),
    Notification(notifications::NotificationMessage),
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    CopyDiagnostics,
    ExportDiagnostics,
    WindowResized(Size),
    /// Periodic tick for toast auto-dismiss and the diagnostics drain.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// URL to pre-fill and generate immediately.
    pub url: Option<String>,
    /// Takes precedence over `ICED_QR_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `ICED_QR_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
