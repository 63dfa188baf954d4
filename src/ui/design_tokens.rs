// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.
The palette is the Material Design 3 baseline (primary `#6750A4`).

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_qr::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.106, 0.122); // #1C1B1F
    pub const GRAY_700: Color = Color::from_rgb(0.286, 0.271, 0.31); // #49454F
    pub const GRAY_400: Color = Color::from_rgb(0.475, 0.455, 0.494); // #79747E
    pub const GRAY_200: Color = Color::from_rgb(0.792, 0.769, 0.816); // #CAC4D0
    pub const GRAY_100: Color = Color::from_rgb(0.906, 0.878, 0.925); // #E7E0EC
    pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.98); // #FAFAFA
    pub const PLACEHOLDER: Color = Color::from_rgb(0.878, 0.878, 0.878); // #E0E0E0

    // Brand colors (Material 3 purple)
    pub const PRIMARY_200: Color = Color::from_rgb(0.816, 0.737, 1.0); // #D0BCFF
    pub const PRIMARY_400: Color = Color::from_rgb(0.545, 0.494, 0.784); // #8B7EC8
    pub const PRIMARY_500: Color = Color::from_rgb(0.404, 0.314, 0.643); // #6750A4
    pub const PRIMARY_700: Color = Color::from_rgb(0.31, 0.216, 0.545); // #4F378B
    pub const SECONDARY_500: Color = Color::from_rgb(0.384, 0.357, 0.443); // #625B71

    // Surfaces
    pub const SURFACE_LIGHT: Color = Color::from_rgb(0.996, 0.969, 1.0); // #FEF7FF
    pub const SURFACE_DARK: Color = Color::from_rgb(0.078, 0.071, 0.094); // #141218
    pub const SURFACE_DARK_RAISED: Color = Color::from_rgb(0.129, 0.122, 0.149); // #211F26

    // Page gradient
    pub const GRADIENT_START: Color = Color::from_rgb(0.4, 0.494, 0.918); // #667EEA
    pub const GRADIENT_END: Color = Color::from_rgb(0.463, 0.294, 0.635); // #764BA2
    pub const GRADIENT_DARK_START: Color = Color::from_rgb(0.149, 0.133, 0.247); // #26223F
    pub const GRADIENT_DARK_END: Color = Color::from_rgb(0.192, 0.114, 0.267); // #311D44

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.702, 0.149, 0.118); // #B3261E
    pub const ERROR_100: Color = Color::from_rgb(0.949, 0.722, 0.71); // #F2B8B5
    pub const WARNING_500: Color = Color::from_rgb(0.929, 0.424, 0.008); // #ED6C02
    pub const SUCCESS_500: Color = Color::from_rgb(0.18, 0.49, 0.196); // #2E7D32
    pub const SUCCESS_100: Color = Color::from_rgb(0.929, 0.969, 0.929); // #EDF7ED
    pub const INFO_500: Color = Color::from_rgb(0.008, 0.533, 0.82); // #0288D1
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.3;
    pub const TEXT_ON_BRAND_MUTED: f32 = 0.6;
    pub const TEXT_ON_BRAND: f32 = 0.8;
    pub const DISABLED: f32 = 0.38;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 48.0;

    /// Color swatch next to the hex fields.
    pub const SWATCH: f32 = 36.0;
    /// Preset color chip.
    pub const CHIP: f32 = 20.0;

    /// Placeholder glyph in the empty preview.
    pub const PLACEHOLDER_GLYPH: f32 = 120.0;
    /// Minimum height of the preview area.
    pub const PREVIEW_MIN_HEIGHT: f32 = 300.0;

    /// Widest the content column grows (Material `lg` container).
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Display title on wide windows (`h2`).
    pub const DISPLAY: f32 = 40.0;

    /// Display title on compact windows (`h4`).
    pub const DISPLAY_COMPACT: f32 = 28.0;

    /// Card headings (`h5`).
    pub const TITLE_LG: f32 = 24.0;

    /// Subtitle on wide windows (`h6`).
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Inputs and alerts.
    pub const LG: f32 = 12.0;
    /// Cards.
    pub const XL: f32 = 16.0;
    /// Buttons.
    pub const BUTTON: f32 = 20.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Material elevation 1 (buttons on hover).
    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Material elevation 3 (cards).
    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_ON_BRAND > opacity::TEXT_ON_BRAND_MUTED);

    assert!(typography::DISPLAY > typography::DISPLAY_COMPACT);
    assert!(typography::DISPLAY_COMPACT > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::BUTTON > radius::XL);
    assert!(radius::XL > radius::LG);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
