// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Each style captures the active [`ColorScheme`] and returns the closure
//! iced expects.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Filled pill button for the main action (Generate, Download).
pub fn contained(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let colors = colors.clone();
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Active => (colors.brand_primary, shadow::NONE),
            button::Status::Hovered => (colors.brand_primary, shadow::SM),
            button::Status::Pressed => (colors.brand_secondary, shadow::NONE),
            button::Status::Disabled => (faded(colors.text_primary, 0.12), shadow::NONE),
        };
        let text_color = if status == button::Status::Disabled {
            faded(colors.text_primary, opacity::DISABLED)
        } else {
            colors.text_on_brand
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::BUTTON.into(),
                ..Default::default()
            },
            shadow,
            snap: true,
        }
    }
}

/// Outlined pill button for secondary actions (Reset, Copy).
pub fn outlined(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let colors = colors.clone();
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(faded(
                colors.brand_primary,
                opacity::OVERLAY_SUBTLE / 2.0,
            ))),
            button::Status::Pressed => Some(Background::Color(faded(
                colors.brand_primary,
                opacity::OVERLAY_SUBTLE,
            ))),
            button::Status::Active | button::Status::Disabled => None,
        };
        let (text_color, border_color) = if status == button::Status::Disabled {
            let muted = faded(colors.text_primary, opacity::DISABLED);
            (muted, muted)
        } else {
            (colors.brand_primary, colors.outline)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::BUTTON.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button (alert and toast close, header toggles).
pub fn text(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(faded(color, opacity::OVERLAY_SUBTLE)))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color: color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Square color chip for the preset palette. `selected` draws a ring.
pub fn chip(
    fill: Color,
    selected: bool,
    ring: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let width = if selected || status == button::Status::Hovered {
            2.0
        } else {
            1.0
        };
        let color = if selected { ring } else { faded(ring, 0.4) };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: Color::TRANSPARENT,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
