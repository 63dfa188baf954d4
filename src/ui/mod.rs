// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`generator`] - URL form, render options and preview
//! - [`notifications`] - Toast notification system for user feedback
//! - [`layout`] - Width breakpoints driving the responsive layout
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod generator;
pub mod layout;
pub mod notifications;
pub mod styles;
pub mod theming;
