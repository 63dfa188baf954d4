// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for individual notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let message = if args.is_empty() {
            i18n.tr(notification.message_key())
        } else {
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Container::new(text(severity.glyph()).size(typography::BODY_LG).color(Color::WHITE))
            .center(Length::Fixed(sizing::CHIP + spacing::XXS))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                border: Border {
                    radius: radius::BUTTON.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let dismiss = button(text("✕").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::text(colors.text_secondary));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(text(message).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        let surface = colors.surface_primary;
        let text_color = colors.text_primary;
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(surface, text_color, accent))
            .into()
    }

    /// Stacks the visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, colors))
            .collect();

        if toasts.is_empty() {
            return Space::new().into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(surface: Color, text_color: Color, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}
