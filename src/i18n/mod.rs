// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to `en-US` for missing translations

pub mod fluent;
