// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for application-level feedback.
//!
//! Form feedback (invalid URL, encode failure, download success) lives in
//! the generator's inline alert. Toasts carry everything that is not tied to
//! the form: configuration warnings, the path a file was saved to, and
//! diagnostics exports.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - `Manager` queuing and auto-dismissal
//! - [`toast`] - Toast rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_qr::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-config-load-error"));
//! ```
//!
//! Durations: 3s for success/info, 5s for warnings, manual dismiss for
//! errors. At most 3 toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
