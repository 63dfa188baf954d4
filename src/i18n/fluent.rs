// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles loaded from the embedded `assets/i18n/*.ftl` files.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded bundle and picks the locale from the CLI flag,
    /// the config file, the OS, then [`DEFAULT_LOCALE`].
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let Some(locale) = file
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(&file) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            // A resource with syntax errors still carries every valid message.
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, _)| partial);

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if bundle.add_resource(resource).is_ok() {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = default_locale();
        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches to `locale` if a bundle exists for it. Returns whether it did.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Translates `key`, falling back to the default locale, then to
    /// `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let default_locale = default_locale();
        let candidates = [&self.current_locale, &default_locale];

        for locale in candidates {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
        }
        format!("MISSING: {key}")
    }
}

fn default_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(DEFAULT_LOCALE.as_bytes()).unwrap_or_default()
}

/// Picks the first requested locale that has a bundle.
///
/// The OS locale also matches on language alone (`fr-CA` selects `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let exact = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    if let Some(lang) = cli_lang.as_deref().and_then(exact) {
        return Some(lang);
    }

    if let Some(lang) = config.general.language.as_deref().and_then(exact) {
        return Some(lang);
    }

    let os_lang = os_locale?.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&os_lang) {
        return Some(os_lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == os_lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_cli_language_falls_through() {
        let lang = resolve_locale(
            Some("de".to_string()),
            &Config::default(),
            Some("fr-FR".to_string()),
            &available(),
        );
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn nothing_matches_returns_none() {
        let lang = resolve_locale(None, &Config::default(), Some("ja-JP".to_string()), &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn bundles_are_embedded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales().len() >= 2);
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn translates_exact_messages() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr("generator-error-invalid-url"),
            "Please enter a valid URL (e.g., https://example.com)"
        );
        assert_eq!(
            i18n.tr_with_args("generator-size-label", &[("size", "300")]),
            "Size: 300px"
        );
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_switches_and_rejects_unknown() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.tr("generator-reset"), "Réinitialiser");
        assert!(!i18n.set_locale("ja".parse().unwrap()));
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn french_bundle_covers_every_english_key() {
        let en = Asset::get("en-US.ftl").unwrap();
        let fr = Asset::get("fr.ftl").unwrap();
        let keys = |bytes: &[u8]| -> Vec<String> {
            String::from_utf8_lossy(bytes)
                .lines()
                .filter_map(|line| line.split_once(" ="))
                .map(|(key, _)| key.trim().to_string())
                .filter(|key| !key.is_empty() && !key.starts_with('#'))
                .collect()
        };
        let fr_keys = keys(&fr.data);
        for key in keys(&en.data) {
            assert!(fr_keys.contains(&key), "fr.ftl is missing {key}");
        }
    }
}
