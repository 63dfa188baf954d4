// SPDX-License-Identifier: MPL-2.0
//! `qrcode` crate adapter implementing the [`QrEncoder`] port trait.
//!
//! The `qrcode` crate computes the module matrix (data encoding, Reed-Solomon
//! blocks, masking, finder and alignment patterns). This adapter only turns
//! that matrix into an RGBA raster of the requested size and colors and
//! packs it as a PNG data URI.
//!
//! [`QrEncoder`]: crate::application::port::QrEncoder

use crate::application::port::{EncodeError, EncodedImage, QrEncoder};
use crate::domain::qr::{ErrorCorrection, RenderOptions};
use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color as ModuleColor, EcLevel, QrCode};
use std::io::Cursor;

/// Production encoder backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeEncoder;

impl QrCodeEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, text: &str, options: &RenderOptions) -> Result<EncodedImage, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(options.error_correction))
            .map_err(|err| match err {
                QrError::DataTooLong => EncodeError::DataTooLong { len: text.len() },
                other => EncodeError::Rendering(other.to_string()),
            })?;

        let dark_modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|module| module == ModuleColor::Dark)
            .collect();

        let raster = rasterize(&dark_modules, code.width(), options);
        let (width, height) = raster.dimensions();

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(raster)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| EncodeError::Rendering(e.to_string()))?;

        Ok(EncodedImage::from_png(&png, width, height, text, *options))
    }
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    }
}

/// Paints a square module matrix into an image of exactly `options.size` pixels,
/// surrounded by `options.margin` light modules.
///
/// `dark_modules` is row-major with `modules_per_side²` entries. Each output
/// pixel samples the module under it, so modules may differ by one pixel in
/// width when the size is not a multiple of the module count.
#[must_use]
pub fn rasterize(dark_modules: &[bool], modules_per_side: usize, options: &RenderOptions) -> RgbaImage {
    let size = options.size.value();
    let margin = options.margin.value() as usize;
    let span = modules_per_side + 2 * margin;
    let dark = Rgba(options.dark.to_rgba());
    let light = Rgba(options.light.to_rgba());

    RgbaImage::from_fn(size, size, |x, y| {
        let column = x as usize * span / size as usize;
        let row = y as usize * span / size as usize;

        let inside = (margin..margin + modules_per_side).contains(&column)
            && (margin..margin + modules_per_side).contains(&row);
        let is_dark = inside
            && dark_modules
                .get((row - margin) * modules_per_side + (column - margin))
                .copied()
                .unwrap_or(false);

        if is_dark {
            dark
        } else {
            light
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::qr::{HexColor, Margin, PixelSize};

    fn decode(image: &EncodedImage) -> RgbaImage {
        let png = image.png_bytes().expect("valid data uri");
        image_rs::load_from_memory(&png).expect("valid png").to_rgba8()
    }

    #[test]
    fn default_options_produce_requested_dimensions() {
        let image = QrCodeEncoder::new()
            .encode("https://example.com", &RenderOptions::default())
            .expect("encode should succeed");

        assert_eq!((image.width(), image.height()), (300, 300));
        assert!(!image.data_uri().is_empty());
        assert_eq!(image.source(), "https://example.com");

        let pixels = decode(&image);
        assert_eq!(pixels.dimensions(), (300, 300));
    }

    #[test]
    fn quiet_zone_uses_light_color_and_finder_uses_dark_color() {
        let options = RenderOptions {
            dark: HexColor::rgb(0x4F, 0x37, 0x8B),
            light: HexColor::rgb(0xFE, 0xF7, 0xFF),
            ..RenderOptions::default()
        };
        let image = QrCodeEncoder::new()
            .encode("https://example.com", &options)
            .unwrap();
        let pixels = decode(&image);

        // Top-left pixel lies in the quiet zone.
        assert_eq!(pixels.get_pixel(0, 0).0, options.light.to_rgba());

        // The first module after the margin is the finder pattern's dark corner.
        // Version 2 at level M is 25 modules wide: span = 29, one module ≈ 10.3px.
        let first_module_px = (2 * 300 / 29 + 1) as u32 + 2;
        assert_eq!(
            pixels.get_pixel(first_module_px, first_module_px).0,
            options.dark.to_rgba()
        );
    }

    #[test]
    fn size_option_is_honoured() {
        let options = RenderOptions {
            size: PixelSize::new(500),
            ..RenderOptions::default()
        };
        let image = QrCodeEncoder::new().encode("https://example.com", &options).unwrap();
        assert_eq!(image.width(), 500);
        assert_eq!(decode(&image).dimensions(), (500, 500));
        assert_eq!(image.options().size.value(), 500);
    }

    #[test]
    fn capacity_depends_on_error_correction() {
        let long_url = format!("https://example.com/{}", "a".repeat(2000));

        let low = RenderOptions {
            error_correction: ErrorCorrection::Low,
            ..RenderOptions::default()
        };
        let high = RenderOptions {
            error_correction: ErrorCorrection::High,
            ..RenderOptions::default()
        };

        assert!(QrCodeEncoder::new().encode(&long_url, &low).is_ok());
        assert_eq!(
            QrCodeEncoder::new().encode(&long_url, &high),
            Err(EncodeError::DataTooLong { len: long_url.len() })
        );
    }

    #[test]
    fn rasterize_without_margin_starts_with_a_module() {
        let options = RenderOptions {
            size: PixelSize::new(200),
            margin: Margin::new(0),
            ..RenderOptions::default()
        };
        // 2x2 checkerboard: dark, light / light, dark
        let raster = rasterize(&[true, false, false, true], 2, &options);

        assert_eq!(raster.get_pixel(0, 0).0, HexColor::BLACK.to_rgba());
        assert_eq!(raster.get_pixel(150, 0).0, HexColor::WHITE.to_rgba());
        assert_eq!(raster.get_pixel(0, 150).0, HexColor::WHITE.to_rgba());
        assert_eq!(raster.get_pixel(199, 199).0, HexColor::BLACK.to_rgba());
    }

    #[test]
    fn rasterize_keeps_margin_light() {
        let options = RenderOptions {
            size: PixelSize::new(200),
            margin: Margin::new(1),
            ..RenderOptions::default()
        };
        // Single dark module with one module of margin: span = 3.
        let raster = rasterize(&[true], 1, &options);

        assert_eq!(raster.get_pixel(0, 0).0, HexColor::WHITE.to_rgba());
        assert_eq!(raster.get_pixel(100, 100).0, HexColor::BLACK.to_rgba());
        assert_eq!(raster.get_pixel(199, 100).0, HexColor::WHITE.to_rgba());
    }
}
