// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and the theme value handed to every view.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Page
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub text_on_gradient: Color,

    // Cards
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub outline: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_brand: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub error_container: Color,
    pub warning: Color,
    pub success: Color,
    pub success_container: Color,
    pub info: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            gradient_start: palette::GRADIENT_START,
            gradient_end: palette::GRADIENT_END,
            text_on_gradient: palette::WHITE,

            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            outline: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_on_brand: palette::WHITE,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_700,

            error: palette::ERROR_500,
            error_container: palette::ERROR_100,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            success_container: palette::SUCCESS_100,
            info: palette::INFO_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            gradient_start: palette::GRADIENT_DARK_START,
            gradient_end: palette::GRADIENT_DARK_END,
            text_on_gradient: palette::GRAY_100,

            surface_primary: palette::SURFACE_DARK,
            surface_secondary: palette::SURFACE_DARK_RAISED,
            outline: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_200,
            text_on_brand: palette::GRAY_900,

            brand_primary: palette::PRIMARY_200,
            brand_secondary: palette::PRIMARY_400,

            error: palette::ERROR_100,
            error_container: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_100,
            success_container: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    /// Effective darkness, resolved once for `System`.
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// System mode asks the OS and treats a failed detection as light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// i18n key of the mode's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Lowercase name as written in `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    /// The matching built-in iced theme, used for widgets not styled here.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}
