// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::PI;

/// Diagonal brand gradient behind the whole window.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let start = colors.gradient_start;
    let end = colors.gradient_end;
    move |_theme: &Theme| {
        // 135deg in CSS terms: top-left to bottom-right.
        let gradient = Linear::new(Radians(3.0 * PI / 4.0))
            .add_stop(0.0, start)
            .add_stop(1.0, end);

        container::Style {
            background: Some(Background::Gradient(gradient.into())),
            ..Default::default()
        }
    }
}

/// Raised card surface.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let colors = colors.clone();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Recessed area holding the preview image or its placeholder.
pub fn preview_frame(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let colors = colors.clone();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.outline,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Inline alert with tinted background and accent border.
pub fn alert(accent: Color, tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Solid square showing the current color of a hex field.
pub fn swatch(fill: Color, outline: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
