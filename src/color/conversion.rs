//! Color space conversion utilities
//!
//! Provides the deterministic transforms used throughout the analysis
//! pipeline:
//! - RGB (0-255) to CIELAB via the standard sRGB→XYZ→Lab chain under D65
//! - Lab back to display sRGB, clamped to gamut
//! - WCAG relative luminance

use palette::{FromColor, IntoColor, Lab, Srgb};

use crate::color::parse::Rgb;

/// Color converter for the sRGB / CIELAB pair under the D65 illuminant
///
/// The conversion is total: every in-range RGB triple converts. There is
/// no state; the struct exists as the seam other components depend on.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert an RGB color to Lab
    ///
    /// Gamma-expands each channel, applies the sRGB-to-XYZ matrix under
    /// D65, then the CIELAB encoding — the `palette` crate's standard
    /// chain.
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        Lab::from_color(self.rgb_to_srgb(rgb))
    }

    /// Convert an RGB color to normalized sRGB components
    pub fn rgb_to_srgb(&self, rgb: Rgb) -> Srgb {
        Srgb::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        )
    }

    /// Convert Lab back to sRGB, clamped to the displayable gamut
    pub fn lab_to_srgb(&self, lab: Lab) -> Srgb {
        let srgb: Srgb = lab.into_color();
        Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        )
    }

    /// WCAG relative luminance of an RGB color
    ///
    /// Gamma-expanded Rec. 709 weighting; 0.0 for black, 1.0 for white.
    pub fn relative_luminance(&self, rgb: Rgb) -> f32 {
        fn expand(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        let srgb = self.rgb_to_srgb(rgb);
        0.2126 * expand(srgb.red) + 0.7152 * expand(srgb.green) + 0.0722 * expand(srgb.blue)
    }
}
