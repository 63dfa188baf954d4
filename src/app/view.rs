// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a gradient backdrop holding a header, the generator cards and
//! a footer. Toasts are stacked on top of everything.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::generator::{self, State as GeneratorState};
use crate::ui::layout::Breakpoint;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::{button, container, pick_list, scrollable, text, Column, Row, Space, Stack};
use iced::{alignment, Color, Element, Length};
use unic_langid::LanguageIdentifier;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub generator: &'a GeneratorState,
    pub notifications: &'a Manager,
    pub breakpoint: Breakpoint,
}

/// Theme entry of the header pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ThemeOption {
    mode: ThemeMode,
    label: String,
}

impl std::fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Language entry of the header pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl std::fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn language_key(locale: &LanguageIdentifier) -> String {
    format!("language-name-{locale}")
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;
    let padding = ctx.breakpoint.page_padding();

    let body = generator::render(
        ctx.generator,
        &generator::ViewContext {
            i18n: ctx.i18n,
            colors,
            breakpoint: ctx.breakpoint,
        },
    )
    .map(Message::Generator);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header(&ctx))
        .push(body)
        .push(footer(&ctx))
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    let page = container(
        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(padding),
        )
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page(colors));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n, colors).map(Message::Notification);

    Stack::new().push(page).push(toasts).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    let on_gradient = colors.text_on_gradient;
    let muted = Color {
        a: opacity::TEXT_ON_BRAND,
        ..on_gradient
    };

    let title = text(ctx.i18n.tr("app-title"))
        .size(ctx.breakpoint.title_size())
        .color(on_gradient)
        .center();
    let subtitle = text(ctx.i18n.tr("app-subtitle"))
        .size(ctx.breakpoint.subtitle_size())
        .color(muted)
        .center();

    let themes: Vec<ThemeOption> = ThemeMode::ALL
        .iter()
        .map(|&mode| ThemeOption {
            mode,
            label: ctx.i18n.tr(mode.i18n_key()),
        })
        .collect();
    let selected_theme = themes.iter().find(|o| o.mode == ctx.theme.mode).cloned();
    let theme_picker = pick_list(themes, selected_theme, |option: ThemeOption| {
        Message::ThemeSelected(option.mode)
    })
    .text_size(typography::BODY)
    .style(styles::input::select(colors));

    let languages: Vec<LanguageOption> = ctx
        .i18n
        .available_locales()
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: ctx.i18n.tr(&language_key(locale)),
        })
        .collect();
    let current = ctx.i18n.current_locale();
    let selected_language = languages.iter().find(|o| &o.locale == current).cloned();
    let language_picker = pick_list(languages, selected_language, |option: LanguageOption| {
        Message::LanguageSelected(option.locale)
    })
    .text_size(typography::BODY)
    .style(styles::input::select(colors));

    let labelled = |label: String, control: Element<'a, Message>| -> Element<'a, Message> {
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(text(label).size(typography::CAPTION).color(muted))
            .push(control)
            .into()
    };

    let diagnostics_button = |key: &str, message: Message| {
        button(text(ctx.i18n.tr(key)).size(typography::CAPTION))
            .on_press(message)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::text(on_gradient))
    };

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(labelled(
            ctx.i18n.tr("header-theme-label"),
            theme_picker.into(),
        ))
        .push(labelled(
            ctx.i18n.tr("header-language-label"),
            language_picker.into(),
        ))
        .push(diagnostics_button(
            "header-copy-diagnostics",
            Message::CopyDiagnostics,
        ))
        .push(diagnostics_button(
            "header-export-diagnostics",
            Message::ExportDiagnostics,
        ))
        .wrap();

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(subtitle)
        .push(Space::new().height(spacing::XS))
        .push(container(controls).center_x(Length::Fill))
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let on_gradient = ctx.theme.colors.text_on_gradient;

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(
            text(ctx.i18n.tr("app-footer-title"))
                .size(typography::BODY)
                .color(on_gradient),
        )
        .push(
            text(ctx.i18n.tr("app-footer-caption"))
                .size(typography::CAPTION)
                .color(Color {
                    a: opacity::TEXT_ON_BRAND_MUTED,
                    ..on_gradient
                }),
        )
        .into()
}
