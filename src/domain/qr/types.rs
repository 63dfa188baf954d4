// SPDX-License-Identifier: MPL-2.0
//! Core QR rendering value objects.

use super::newtypes::{Margin, PixelSize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ErrorCorrection
// =============================================================================

/// Redundancy tier of the QR symbol.
///
/// Higher levels survive more damage but hold less data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    /// Recovers ~7% of codewords.
    Low,
    /// Recovers ~15% of codewords.
    #[default]
    Medium,
    /// Recovers ~25% of codewords.
    Quartile,
    /// Recovers ~30% of codewords.
    High,
}

impl ErrorCorrection {
    /// All levels, from least to most redundant.
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::Low,
        ErrorCorrection::Medium,
        ErrorCorrection::Quartile,
        ErrorCorrection::High,
    ];

    /// Single-letter code used by the QR standard (`L`, `M`, `Q`, `H`).
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            ErrorCorrection::Low => 'L',
            ErrorCorrection::Medium => 'M',
            ErrorCorrection::Quartile => 'Q',
            ErrorCorrection::High => 'H',
        }
    }

    /// Approximate share of codewords that can be restored.
    #[must_use]
    pub fn recovery_percent(self) -> u8 {
        match self {
            ErrorCorrection::Low => 7,
            ErrorCorrection::Medium => 15,
            ErrorCorrection::Quartile => 25,
            ErrorCorrection::High => 30,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::Low),
            "M" => Ok(ErrorCorrection::Medium),
            "Q" => Ok(ErrorCorrection::Quartile),
            "H" => Ok(ErrorCorrection::High),
            other => Err(format!("unknown error correction level: {other}")),
        }
    }
}

// =============================================================================
// HexColor
// =============================================================================

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// The input was empty (after trimming and removing `#`).
    Empty,
    /// The digit count was not 3, 4, 6 or 8.
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F` was found.
    InvalidDigit(char),
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexColorError::Empty => write!(f, "empty color"),
            HexColorError::InvalidLength(len) => {
                write!(f, "expected 3, 4, 6 or 8 hex digits, got {len}")
            }
            HexColorError::InvalidDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl std::error::Error for HexColorError {}

/// An sRGB color with alpha, written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::rgb(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns whether the color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a == 0xFF
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(HexColorError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(bad));
        }

        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            len => return Err(HexColorError::InvalidLength(len)),
        };

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels.get(3).copied().unwrap_or(0xFF),
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

// =============================================================================
// RenderOptions
// =============================================================================

/// Everything besides the payload that determines the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub size: PixelSize,
    pub margin: Margin,
    pub error_correction: ErrorCorrection,
    pub dark: HexColor,
    pub light: HexColor,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: PixelSize::default(),
            margin: Margin::default(),
            error_correction: ErrorCorrection::default(),
            dark: HexColor::BLACK,
            light: HexColor::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_correction_letters() {
        let letters: String = ErrorCorrection::ALL.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, "LMQH");
    }

    #[test]
    fn error_correction_recovery_increases() {
        let percents: Vec<u8> = ErrorCorrection::ALL
            .iter()
            .map(|l| l.recovery_percent())
            .collect();
        assert_eq!(percents, vec![7, 15, 25, 30]);
    }

    #[test]
    fn error_correction_parses_case_insensitively() {
        assert_eq!("q".parse::<ErrorCorrection>(), Ok(ErrorCorrection::Quartile));
        assert_eq!(" H ".parse::<ErrorCorrection>(), Ok(ErrorCorrection::High));
        assert!("X".parse::<ErrorCorrection>().is_err());
    }

    #[test]
    fn error_correction_default_is_medium() {
        assert_eq!(ErrorCorrection::default(), ErrorCorrection::Medium);
    }

    #[test]
    fn hex_color_parses_long_form() {
        let color: HexColor = "#6750A4".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0x67, 0x50, 0xA4));
    }

    #[test]
    fn hex_color_parses_short_form() {
        let color: HexColor = "#f0a".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn hex_color_parses_alpha() {
        let color: HexColor = "00000080".parse().unwrap();
        assert_eq!(color.a, 0x80);
        assert!(!color.is_opaque());
        assert_eq!(color.to_string(), "#00000080");
    }

    #[test]
    fn hex_color_rejects_bad_input() {
        assert_eq!("#".parse::<HexColor>(), Err(HexColorError::Empty));
        assert_eq!("#12345".parse::<HexColor>(), Err(HexColorError::InvalidLength(5)));
        assert_eq!("#12345g".parse::<HexColor>(), Err(HexColorError::InvalidDigit('g')));
    }

    #[test]
    fn hex_color_allows_a_single_hash() {
        assert_eq!("##000".parse::<HexColor>(), Err(HexColorError::InvalidDigit('#')));
        assert_eq!("###fff".parse::<HexColor>(), Err(HexColorError::InvalidDigit('#')));
        assert_eq!("fff".parse::<HexColor>(), Ok(HexColor::WHITE));
    }

    #[test]
    fn hex_color_display_is_uppercase() {
        assert_eq!(HexColor::WHITE.to_string(), "#FFFFFF");
        assert_eq!(HexColor::BLACK.to_string(), "#000000");
    }

    #[test]
    fn render_options_default_matches_form_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.size.value(), 300);
        assert_eq!(options.margin.value(), 2);
        assert_eq!(options.error_correction, ErrorCorrection::Medium);
        assert_eq!(options.dark, HexColor::BLACK);
        assert_eq!(options.light, HexColor::WHITE);
    }
}
