// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Generator events are turned into `Task`s here. Blocking work (encoding,
//! PNG decoding, file and clipboard writes) runs on `spawn_blocking` and
//! reports its duration to diagnostics from the worker thread.

use super::{config, paths, App, Message};
use crate::application::port::{
    timestamped_file_name, ClipboardError, ClipboardImage, EncodeError, EncodedImage, SaveError,
    SaveRequest,
};
use crate::application::request::RequestTicket;
use crate::diagnostics::{
    default_export_directory, generate_default_filename, AppOperation, AppStateEvent,
    DiagnosticsHandle, UrlSummary, UserAction,
};
use crate::domain::qr::{HexColor, PixelSize, RenderOptions};
use crate::ui::generator::{self, Event as GeneratorEvent};
use crate::ui::layout::Breakpoint;
use crate::ui::notifications::Notification;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    app.diagnostics.process_pending();

    match message {
        Message::Generator(msg) => handle_generator_message(app, msg),
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::ThemeSelected(mode) => {
            handle_theme_selected(app, mode);
            Task::none()
        }
        Message::LanguageSelected(locale) => {
            handle_language_selected(app, locale);
            Task::none()
        }
        Message::CopyDiagnostics => {
            handle_copy_diagnostics(app);
            Task::none()
        }
        Message::ExportDiagnostics => {
            handle_export_diagnostics(app);
            Task::none()
        }
        Message::WindowResized(size) => {
            let breakpoint = Breakpoint::from_width(size.width);
            if breakpoint != app.breakpoint {
                app.breakpoint = breakpoint;
                app.diagnostics
                    .handle()
                    .log_state(AppStateEvent::BreakpointChanged {
                        breakpoint: breakpoint.as_str().to_string(),
                    });
            }
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick_at(now);
            Task::none()
        }
    }
}

fn handle_generator_message(app: &mut App, message: generator::Message) -> Task<Message> {
    let handle = app.diagnostics.handle();
    if let Some(action) = user_action(&app.generator, &message) {
        handle.log_action(action);
    }
    match &message {
        generator::Message::DownloadFinished(Err(err)) => handle.log_error(err.to_string()),
        generator::Message::CopyFinished(Err(err)) => handle.log_error(err.to_string()),
        _ => {}
    }

    match app.generator.update(message) {
        GeneratorEvent::None => Task::none(),
        GeneratorEvent::EncodeRequested {
            ticket,
            text,
            options,
        } => encode_task(app, ticket, text, options),
        GeneratorEvent::DownloadRequested(image) => download_task(app, image),
        GeneratorEvent::CopyRequested(image) => copy_task(app, image),
        GeneratorEvent::Downloaded(path) => {
            app.notifications.push(
                Notification::info("notification-saved-to")
                    .with_arg("path", path.display().to_string()),
            );
            Task::none()
        }
        GeneratorEvent::StaleResultDiscarded(ticket) => {
            handle.log_state(AppStateEvent::StaleResultDiscarded {
                ticket: ticket.value(),
            });
            Task::none()
        }
    }
}

/// Maps a form message to the user action it represents, if any.
///
/// Option messages are only reported when they change the current value.
fn user_action(state: &generator::State, message: &generator::Message) -> Option<UserAction> {
    let options = state.options();
    match message {
        generator::Message::Submit => Some(UserAction::Generate {
            url: UrlSummary::of(state.input()),
        }),
        generator::Message::Reset => Some(UserAction::Reset),
        generator::Message::Download if state.preview().is_some() => Some(UserAction::Download),
        generator::Message::Copy if state.preview().is_some() => Some(UserAction::Copy),
        generator::Message::SizeChanged(pixels) => {
            let size = PixelSize::new(*pixels);
            (size != options.size).then(|| UserAction::SetSize {
                pixels: size.value(),
            })
        }
        generator::Message::ErrorCorrectionSelected(level) => {
            (*level != options.error_correction).then(|| UserAction::SetErrorCorrection {
                level: level.letter().to_string(),
            })
        }
        generator::Message::DarkInputChanged(raw) => raw
            .parse::<HexColor>()
            .ok()
            .filter(|color| *color != options.dark)
            .map(|color| UserAction::SetDarkColor {
                color: color.to_string(),
            }),
        generator::Message::PresetDark(color) if *color != options.dark => {
            Some(UserAction::SetDarkColor {
                color: color.to_string(),
            })
        }
        generator::Message::LightInputChanged(raw) => raw
            .parse::<HexColor>()
            .ok()
            .filter(|color| *color != options.light)
            .map(|color| UserAction::SetLightColor {
                color: color.to_string(),
            }),
        generator::Message::PresetLight(color) if *color != options.light => {
            Some(UserAction::SetLightColor {
                color: color.to_string(),
            })
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

fn encode_task(
    app: &App,
    ticket: RequestTicket,
    text: String,
    options: RenderOptions,
) -> Task<Message> {
    let encoder = Arc::clone(&app.ports.encoder);
    let handle = app.diagnostics.handle();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let started = Instant::now();
                let result = encoder.encode(&text, &options);
                handle.log_operation(AppOperation::Encode {
                    duration_ms: elapsed_ms(started),
                    size: options.size.value(),
                    level: options.error_correction.letter().to_string(),
                    payload_len: text.len(),
                    success: result.is_ok(),
                });
                result
            })
            .await
            .unwrap_or_else(|e| Err(EncodeError::Rendering(e.to_string())))
        },
        move |result| Message::Generator(generator::Message::EncodeFinished { ticket, result }),
    )
}

fn download_task(app: &App, image: EncodedImage) -> Task<Message> {
    let saver = Arc::clone(&app.ports.saver);
    let handle = app.diagnostics.handle();
    let directory = app.config.export.resolved_directory();
    let ask_location = app.config.export.ask_location;

    Task::perform(
        async move {
            let millis = chrono::Utc::now().timestamp_millis();
            let request = if ask_location {
                let picked = rfd::AsyncFileDialog::new()
                    .set_directory(&directory)
                    .set_file_name(timestamped_file_name(millis))
                    .add_filter("PNG", &["png"])
                    .save_file()
                    .await;
                let Some(picked) = picked else {
                    return None;
                };
                SaveRequest::exact(picked.path())
            } else {
                SaveRequest::timestamped(directory, millis)
            };

            let result = tokio::task::spawn_blocking(move || {
                let started = Instant::now();
                let result = image
                    .png_bytes()
                    .map_err(|e| SaveError::Io(e.to_string()))
                    .and_then(|png| saver.save(&request, &png));
                handle.log_operation(AppOperation::SaveImage {
                    duration_ms: elapsed_ms(started),
                    success: result.is_ok(),
                });
                result
            })
            .await
            .unwrap_or_else(|e| Err(SaveError::Io(e.to_string())));

            Some(result)
        },
        |outcome: Option<Result<PathBuf, SaveError>>| {
            Message::Generator(match outcome {
                Some(result) => generator::Message::DownloadFinished(result),
                None => generator::Message::DownloadCancelled,
            })
        },
    )
}

fn copy_task(app: &App, image: EncodedImage) -> Task<Message> {
    let clipboard = Arc::clone(&app.ports.clipboard);
    let handle = app.diagnostics.handle();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let started = Instant::now();
                let result = image
                    .png_bytes()
                    .map_err(|e| ClipboardError::InvalidImage(e.to_string()))
                    .and_then(|png| ClipboardImage::from_png(&png))
                    .and_then(|payload| clipboard.write_image(payload));
                handle.log_operation(AppOperation::CopyImage {
                    duration_ms: elapsed_ms(started),
                    success: result.is_ok(),
                });
                result
            })
            .await
            .unwrap_or_else(|e| Err(ClipboardError::Unavailable(e.to_string())))
        },
        |result| Message::Generator(generator::Message::CopyFinished(result)),
    )
}

fn handle_theme_selected(app: &mut App, mode: ThemeMode) {
    if mode == app.theme.mode {
        return;
    }
    app.diagnostics.handle().log_action(UserAction::ChangeTheme {
        mode: mode.as_str().to_string(),
    });
    app.theme = AppTheme::new(mode);
    app.config.general.theme_mode = mode;
    persist_config(app);
}

fn handle_language_selected(app: &mut App, locale: LanguageIdentifier) {
    if !app.i18n.set_locale(locale.clone()) {
        return;
    }
    app.diagnostics
        .handle()
        .log_action(UserAction::ChangeLanguage {
            locale: locale.to_string(),
        });
    app.config.general.language = Some(locale.to_string());
    persist_config(app);
}

fn persist_config(app: &mut App) {
    if config::save_with_override(&app.config, app.config_dir.clone()).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

fn handle_copy_diagnostics(app: &mut App) {
    let handle: DiagnosticsHandle = app.diagnostics.handle();
    handle.log_action(UserAction::CopyDiagnostics);
    app.diagnostics.process_pending();

    match app.diagnostics.export_to_clipboard() {
        Ok(()) => app
            .notifications
            .push(Notification::success("notification-diagnostics-copied")),
        Err(err) => {
            handle.log_warning(err.to_string());
            app.notifications
                .push(Notification::error("notification-diagnostics-failed"));
        }
    }
}

fn handle_export_diagnostics(app: &mut App) {
    app.diagnostics.process_pending();

    let directory = paths::get_app_data_dir().unwrap_or_else(default_export_directory);
    let result = std::fs::create_dir_all(&directory)
        .map_err(crate::diagnostics::ExportError::from)
        .and_then(|()| {
            app.diagnostics
                .export_to_file(directory.join(generate_default_filename()))
        });

    match result {
        Ok(path) => app.notifications.push(
            Notification::success("notification-saved-to")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => {
            app.diagnostics.handle().log_warning(err.to_string());
            app.notifications
                .push(Notification::error("notification-diagnostics-failed"));
        }
    }
}
