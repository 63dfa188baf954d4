// SPDX-License-Identifier: MPL-2.0
//! Text input and pick list styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::{pick_list, text_input};
use iced::Theme;

/// Outlined field with the brand color on focus.
pub fn outlined(colors: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let colors = colors.clone();
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        style.border.radius = radius::LG.into();
        style.border.color = match status {
            text_input::Status::Focused { .. } => colors.brand_primary,
            _ => colors.outline,
        };
        style
    }
}

/// Same shape as [`outlined`], for the error-correction selector.
pub fn select(colors: &ColorScheme) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    let colors = colors.clone();
    move |theme: &Theme, status: pick_list::Status| {
        let mut style = pick_list::default(theme, status);
        style.border.radius = radius::LG.into();
        style.border.color = match status {
            pick_list::Status::Opened { .. } | pick_list::Status::Hovered => colors.brand_primary,
            pick_list::Status::Active => colors.outline,
        };
        style
    }
}
