//! Color parsing, conversion, and perceptual difference module
//!
//! This module handles RGB literal parsing, color space conversion to
//! CIELAB, and the CIEDE2000 perceptual difference metric.

pub mod conversion;
pub mod difference;
pub mod parse;

pub use conversion::ColorConverter;
pub use difference::delta_e_2000;
pub use parse::{ColorSample, Rgb};
