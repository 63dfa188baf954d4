// SPDX-License-Identifier: MPL-2.0
//! Preview card: the generated image with its export actions, or a placeholder.

use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::generator::{Message, State};
use crate::ui::styles;
use iced::widget::{button, container, image, text, tooltip, Column, Row};
use iced::{alignment, Element, Length};

/// Largest edge the preview is drawn at; bigger images are scaled down.
const MAX_DISPLAY_SIZE: f32 = 400.0;

pub fn card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let body: Element<'a, Message> = match state.preview() {
        Some(preview) => {
            #[allow(clippy::cast_precision_loss)]
            let edge = (preview.image().width() as f32).min(MAX_DISPLAY_SIZE);
            let picture = image(preview.handle().clone())
                .width(Length::Fixed(edge))
                .height(Length::Fixed(edge));

            let download = tooltip(
                button(text(ctx.i18n.tr("generator-download")).size(typography::BODY_LG))
                    .on_press(Message::Download)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::contained(colors)),
                text(ctx.i18n.tr("generator-download-tooltip")).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .gap(4);
            let copy = tooltip(
                button(text(ctx.i18n.tr("generator-copy")).size(typography::BODY_LG))
                    .on_press(Message::Copy)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::outlined(colors)),
                text(ctx.i18n.tr("generator-copy-tooltip")).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .gap(4);

            Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .push(
                    container(picture)
                        .padding(spacing::MD)
                        .style(styles::container::preview_frame(colors)),
                )
                .push(Row::new().spacing(spacing::SM).push(download).push(copy))
                .into()
        }
        None => container(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(
                    text("▦")
                        .size(sizing::PLACEHOLDER_GLYPH)
                        .color(colors.outline),
                )
                .push(
                    text(ctx.i18n.tr("generator-preview-hint"))
                        .size(typography::BODY)
                        .color(colors.text_secondary)
                        .center(),
                ),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::PREVIEW_MIN_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::preview_frame(colors))
        .into(),
    };

    container(
        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(
                container(text(ctx.i18n.tr("generator-preview-title")).size(typography::TITLE_LG))
                    .width(Length::Fill),
            )
            .push(body),
    )
    .padding(ctx.breakpoint.card_padding())
    .width(Length::Fill)
    .style(styles::container::card(colors))
    .into()
}
