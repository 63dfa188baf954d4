// SPDX-License-Identifier: MPL-2.0
//! Window-width breakpoints driving the responsive layout.
//!
//! | Breakpoint | Width | Cards |
//! |---|---|---|
//! | `Compact` | < 600 | stacked |
//! | `Medium` | 600–899 | stacked |
//! | `Expanded` | ≥ 900 | side by side |

use crate::ui::design_tokens::{spacing, typography};

/// Lower bound of [`Breakpoint::Medium`].
pub const MEDIUM_MIN_WIDTH: f32 = 600.0;

/// Lower bound of [`Breakpoint::Expanded`].
pub const EXPANDED_MIN_WIDTH: f32 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Compact,
    Medium,
    Expanded,
}

impl Breakpoint {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= EXPANDED_MIN_WIDTH {
            Breakpoint::Expanded
        } else if width >= MEDIUM_MIN_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Compact
        }
    }

    /// Whether the configuration and preview cards sit next to each other.
    #[must_use]
    pub fn side_by_side(self) -> bool {
        self == Breakpoint::Expanded
    }

    #[must_use]
    pub fn title_size(self) -> f32 {
        match self {
            Breakpoint::Compact => typography::DISPLAY_COMPACT,
            Breakpoint::Medium | Breakpoint::Expanded => typography::DISPLAY,
        }
    }

    #[must_use]
    pub fn subtitle_size(self) -> f32 {
        match self {
            Breakpoint::Compact => typography::BODY_LG,
            Breakpoint::Medium | Breakpoint::Expanded => typography::TITLE_MD,
        }
    }

    /// Padding inside each card.
    #[must_use]
    pub fn card_padding(self) -> f32 {
        match self {
            Breakpoint::Compact => spacing::MD,
            Breakpoint::Medium => spacing::LG,
            Breakpoint::Expanded => spacing::XL,
        }
    }

    /// Padding around the page content.
    #[must_use]
    pub fn page_padding(self) -> f32 {
        match self {
            Breakpoint::Compact => spacing::MD,
            Breakpoint::Medium => spacing::LG,
            Breakpoint::Expanded => spacing::XL,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Compact => "compact",
            Breakpoint::Medium => "medium",
            Breakpoint::Expanded => "expanded",
        }
    }
}
