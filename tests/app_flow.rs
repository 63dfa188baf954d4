// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the application state machine.
//!
//! Background tasks are never executed here; these tests cover what
//! `App::update` does synchronously.

use iced::Size;
use iced_qr::app::config::{self, Config};
use iced_qr::app::{App, Flags, Message, Ports};
use iced_qr::diagnostics::{AppStateEvent, DiagnosticEventKind, UserAction};
use iced_qr::ui::generator::{self, Feedback};
use iced_qr::ui::layout::Breakpoint;
use iced_qr::ui::theming::ThemeMode;
use std::time::Instant;
use tempfile::{tempdir, TempDir};

fn boot(flags: Flags) -> (App, TempDir) {
    let dir = tempdir().expect("temp dir");
    let (app, _task) = App::with_config(
        flags,
        Config::default(),
        None,
        Some(dir.path().to_path_buf()),
        Ports::production(),
    );
    (app, dir)
}

fn flush(app: &mut App) {
    let _ = app.update(Message::Tick(Instant::now()));
}

fn logged_actions(app: &App) -> Vec<UserAction> {
    app.diagnostics()
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action, .. } => Some(action.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn startup_is_logged_and_nothing_is_pending() {
    let (mut app, _dir) = boot(Flags::default());
    flush(&mut app);

    assert!(app.diagnostics().iter().any(|event| matches!(
        &event.kind,
        DiagnosticEventKind::AppState {
            state: AppStateEvent::Started { .. }
        }
    )));
    assert!(app.generator().preview().is_none());
    assert!(!app.generator().is_generating());
}

#[test]
fn url_flag_starts_generation() {
    let (app, _dir) = boot(Flags {
        url: Some("https://example.com".to_string()),
        ..Flags::default()
    });

    assert_eq!(app.generator().input(), "https://example.com");
    assert!(app.generator().is_generating());
}

#[test]
fn invalid_url_flag_shows_validation_error() {
    let (app, _dir) = boot(Flags {
        url: Some("not a url".to_string()),
        ..Flags::default()
    });

    assert_eq!(
        app.generator().feedback(),
        Some(Feedback::Error("generator-error-invalid-url"))
    );
    assert!(!app.generator().is_generating());
}

#[test]
fn submit_is_logged_without_the_url() {
    let (mut app, _dir) = boot(Flags::default());
    let _ = app.update(Message::Generator(generator::Message::UrlChanged(
        "https://private.example/token".to_string(),
    )));
    let _ = app.update(Message::Generator(generator::Message::Submit));
    flush(&mut app);

    let actions = logged_actions(&app);
    let Some(UserAction::Generate { url }) = actions.first() else {
        panic!("expected a generate action, got {actions:?}");
    };
    assert_eq!(url.scheme.as_deref(), Some("https"));

    let report = app.diagnostics().export_json().expect("report serializes");
    assert!(!report.contains("private.example"));
}

#[test]
fn theme_change_is_persisted() {
    let (mut app, dir) = boot(Flags::default());
    let _ = app.update(Message::ThemeSelected(ThemeMode::Dark));

    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    assert_eq!(app.config().general.theme_mode, ThemeMode::Dark);

    let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
}

#[test]
fn language_change_is_persisted_and_logged() {
    let (mut app, dir) = boot(Flags {
        lang: Some("en-US".to_string()),
        ..Flags::default()
    });
    let _ = app.update(Message::LanguageSelected("fr".parse().expect("locale")));
    flush(&mut app);

    assert_eq!(app.i18n.current_locale().to_string(), "fr");
    assert_eq!(app.title(), app.i18n.tr("app-title"));

    let (saved, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(saved.general.language.as_deref(), Some("fr"));
    assert!(logged_actions(&app).contains(&UserAction::ChangeLanguage {
        locale: "fr".to_string()
    }));
}

#[test]
fn unknown_language_is_ignored() {
    let (mut app, dir) = boot(Flags {
        lang: Some("en-US".to_string()),
        ..Flags::default()
    });
    let _ = app.update(Message::LanguageSelected("xx".parse().expect("locale")));

    assert_eq!(app.i18n.current_locale().to_string(), "en-US");
    assert!(!dir.path().join("settings.toml").exists());
}

#[test]
fn resizing_across_a_breakpoint_switches_layout() {
    let (mut app, _dir) = boot(Flags::default());
    assert_eq!(app.breakpoint(), Breakpoint::Expanded);

    let _ = app.update(Message::WindowResized(Size::new(420.0, 700.0)));
    assert_eq!(app.breakpoint(), Breakpoint::Compact);

    let _ = app.update(Message::WindowResized(Size::new(700.0, 700.0)));
    assert_eq!(app.breakpoint(), Breakpoint::Medium);
    flush(&mut app);

    let changes = app
        .diagnostics()
        .iter()
        .filter(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::BreakpointChanged { .. }
                }
            )
        })
        .count();
    assert_eq!(changes, 2);
}

#[test]
fn config_warning_becomes_a_toast() {
    let dir = tempdir().expect("temp dir");
    let (app, _task) = App::with_config(
        Flags::default(),
        Config::default(),
        Some("notification-config-load-error".to_string()),
        Some(dir.path().to_path_buf()),
        Ports::production(),
    );

    let keys: Vec<&str> = app
        .notifications()
        .visible()
        .map(|n| n.message_key())
        .collect();
    assert_eq!(keys, vec!["notification-config-load-error"]);
}

#[test]
fn reset_restores_defaults() {
    let (mut app, _dir) = boot(Flags::default());
    let _ = app.update(Message::Generator(generator::Message::UrlChanged(
        "https://example.com".to_string(),
    )));
    let _ = app.update(Message::Generator(generator::Message::SizeChanged(600)));
    let _ = app.update(Message::Generator(generator::Message::Reset));

    assert_eq!(app.generator().input(), "");
    assert_eq!(app.generator().options().size.value(), 300);
}
