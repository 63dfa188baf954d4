// SPDX-License-Identifier: MPL-2.0
//! Configuration card: URL, size, error correction and colors.

use super::{to_color, ViewContext};
use crate::domain::qr::{size_bounds, ErrorCorrection, HexColor};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::generator::{Feedback, Message, State, DARK_PRESETS, LIGHT_PRESETS};
use crate::ui::styles;
use iced::widget::{button, container, pick_list, slider, text, text_input, Column, Row, Space};
use iced::{alignment, Element, Length};

/// Error-correction entry of the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LevelOption {
    level: ErrorCorrection,
    label: String,
}

impl std::fmt::Display for LevelOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn level_key(level: ErrorCorrection) -> &'static str {
    match level {
        ErrorCorrection::Low => "generator-ec-low",
        ErrorCorrection::Medium => "generator-ec-medium",
        ErrorCorrection::Quartile => "generator-ec-quartile",
        ErrorCorrection::High => "generator-ec-high",
    }
}

pub fn card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let url_placeholder = ctx.i18n.tr("generator-url-placeholder");
    let url_input = text_input(url_placeholder.as_str(), state.input())
        .on_input(Message::UrlChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::input::outlined(colors));

    let size = state.options().size.value();
    let size_text = size.to_string();
    let size_label = ctx
        .i18n
        .tr_with_args("generator-size-label", &[("size", size_text.as_str())]);
    let size_slider = slider(size_bounds::MIN..=size_bounds::MAX, size, Message::SizeChanged)
        .step(size_bounds::STEP);

    let levels: Vec<LevelOption> = ErrorCorrection::ALL
        .iter()
        .map(|&level| LevelOption {
            level,
            label: ctx.i18n.tr(level_key(level)),
        })
        .collect();
    let selected_level = levels
        .iter()
        .find(|option| option.level == state.options().error_correction)
        .cloned();
    let level_picker = pick_list(levels, selected_level, |option| {
        Message::ErrorCorrectionSelected(option.level)
    })
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::input::select(colors));

    let dark_field = color_field(
        ctx,
        ctx.i18n.tr("generator-dark-color"),
        state.dark_input(),
        state.options().dark,
        &DARK_PRESETS,
        Message::DarkInputChanged,
        Message::PresetDark,
    );
    let light_field = color_field(
        ctx,
        ctx.i18n.tr("generator-light-color"),
        state.light_input(),
        state.options().light,
        &LIGHT_PRESETS,
        Message::LightInputChanged,
        Message::PresetLight,
    );
    let colors_section: Element<'a, Message> = if ctx.breakpoint.side_by_side() {
        Column::new()
            .spacing(spacing::MD)
            .push(dark_field)
            .push(light_field)
            .into()
    } else {
        Row::new()
            .spacing(spacing::MD)
            .push(container(dark_field).width(Length::FillPortion(1)))
            .push(container(light_field).width(Length::FillPortion(1)))
            .into()
    };

    let generate_label = if state.is_generating() {
        ctx.i18n.tr("generator-generating")
    } else {
        ctx.i18n.tr("generator-generate")
    };
    let generate = button(text(generate_label).size(typography::BODY_LG))
        .on_press_maybe(state.can_generate().then_some(Message::Submit))
        .padding([spacing::SM, spacing::LG])
        .width(Length::FillPortion(2))
        .style(styles::button::contained(colors));
    let reset = button(text(ctx.i18n.tr("generator-reset")).size(typography::BODY_LG))
        .on_press(Message::Reset)
        .padding([spacing::SM, spacing::LG])
        .width(Length::FillPortion(1))
        .style(styles::button::outlined(colors));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(text(ctx.i18n.tr("generator-config-title")).size(typography::TITLE_LG))
        .push(labeled(ctx.i18n.tr("generator-url-label"), url_input))
        .push(labeled(size_label, size_slider))
        .push(labeled(ctx.i18n.tr("generator-ec-label"), level_picker))
        .push(colors_section)
        .push(Row::new().spacing(spacing::SM).push(generate).push(reset));

    if let Some(feedback) = state.feedback() {
        content = content.push(alert(feedback, ctx));
    }

    container(content)
        .padding(ctx.breakpoint.card_padding())
        .width(Length::Fill)
        .style(styles::container::card(colors))
        .into()
}

fn labeled<'a>(label: String, field: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY))
        .push(field)
        .into()
}

fn color_field<'a>(
    ctx: &ViewContext<'a>,
    label: String,
    raw: &'a str,
    current: HexColor,
    presets: &[HexColor],
    on_input: fn(String) -> Message,
    on_preset: fn(HexColor) -> Message,
) -> Element<'a, Message> {
    let colors = ctx.colors;

    let swatch = container(Space::new())
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .style(styles::container::swatch(to_color(current), colors.outline));

    let placeholder = ctx.i18n.tr("generator-color-placeholder");
    let input = text_input(placeholder.as_str(), raw)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(styles::input::outlined(colors));

    let chips = presets.iter().fold(Row::new().spacing(spacing::XS), |row, &preset| {
        row.push(
            button(Space::new())
                .width(Length::Fixed(sizing::CHIP))
                .height(Length::Fixed(sizing::CHIP))
                .on_press(on_preset(preset))
                .style(styles::button::chip(
                    to_color(preset),
                    preset == current,
                    colors.text_primary,
                )),
        )
    });

    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(swatch)
                .push(input),
        )
        .push(chips)
        .into()
}

fn alert<'a>(feedback: Feedback, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let (accent, tint) = if feedback.is_error() {
        (colors.error, colors.error_container)
    } else {
        (colors.success, colors.success_container)
    };

    let dismiss = button(text("✕").size(typography::BODY))
        .on_press(Message::DismissFeedback)
        .padding(spacing::XXS)
        .style(styles::button::text(accent));

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                text(ctx.i18n.tr(feedback.i18n_key()))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::alert(accent, tint))
    .into()
}
