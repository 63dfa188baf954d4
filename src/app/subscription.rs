// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::NOTIFICATION_TICK_MS;
use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes so the layout can follow the breakpoints.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Periodic tick for toast auto-dismiss, active only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
