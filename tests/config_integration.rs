// SPDX-License-Identifier: MPL-2.0
use iced_qr::app::config::{self, Config};
use iced_qr::app::{App, Flags, Ports};
use iced_qr::i18n::fluent::I18n;
use iced_qr::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn hand_written_settings_file_is_honoured() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Dark"

[generator]
margin = 4

[export]
ask_location = true
"#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.generator.margin().value(), 4);
    assert!(config.export.ask_location);
    assert_eq!(config.diagnostics, Default::default());
}

#[test]
fn broken_settings_file_falls_back_to_defaults_with_a_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn configured_margin_reaches_the_generator() {
    let dir = tempdir().expect("temp dir");
    let mut config = Config::default();
    config.generator.margin = Some(0);
    config.general.theme_mode = ThemeMode::Light;

    let (app, _task) = App::with_config(
        Flags::default(),
        config,
        None,
        Some(dir.path().to_path_buf()),
        Ports::production(),
    );

    assert_eq!(app.generator().options().margin.value(), 0);
    assert_eq!(app.theme_mode(), ThemeMode::Light);
}
