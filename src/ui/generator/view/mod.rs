// SPDX-License-Identifier: MPL-2.0
//! Generator view composition.

mod form;
mod preview;

use super::{Message, State};
use crate::domain::qr::HexColor;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::layout::Breakpoint;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Row};
use iced::{Color, Element, Length};

/// Contextual data needed to render the generator.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub breakpoint: Breakpoint,
}

/// Configuration card and preview card, side by side on wide windows.
pub fn render<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = form::card(state, ctx);
    let preview = preview::card(state, ctx);
    let gap = if ctx.breakpoint == Breakpoint::Compact {
        spacing::MD
    } else {
        spacing::LG
    };

    if ctx.breakpoint.side_by_side() {
        Row::new()
            .spacing(gap)
            .push(iced::widget::container(form).width(Length::FillPortion(1)))
            .push(iced::widget::container(preview).width(Length::FillPortion(1)))
            .into()
    } else {
        Column::new().spacing(gap).push(form).push(preview).into()
    }
}

pub(super) fn to_color(color: HexColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_convert_to_iced_colors() {
        assert_eq!(to_color(HexColor::BLACK), Color::BLACK);
        assert_eq!(to_color(HexColor::WHITE), Color::WHITE);

        let translucent: HexColor = "#FF000080".parse().unwrap();
        let color = to_color(translucent);
        assert_eq!(color.r, 1.0);
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }
}
