//! RGB value type and color literal parsing
//!
//! Accepts the two literal forms used across the toolchain:
//! - 6-hex-digit strings, case-insensitive, with or without a leading `#`
//! - three integer components in [0, 255] separated by commas and/or spaces

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnalysisError, Result};

/// An sRGB color with 8-bit components
///
/// Components are always in [0, 255] by construction. Ordering is the
/// plain (r, g, b) tuple order, which batch loaders use to give cache
/// entries a deterministic sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as a lowercase `#rrggbb` hex string
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Rgb {
    type Err = AnalysisError;

    /// Parse a color literal
    ///
    /// # Errors
    ///
    /// Returns `MalformedColorLiteral` for the wrong component count,
    /// non-integer components, out-of-range components, or malformed hex.
    fn from_str(s: &str) -> Result<Self> {
        let stripped = s.trim().to_ascii_lowercase();
        let stripped = stripped.strip_prefix('#').unwrap_or(&stripped);

        // Hex fast path: exactly six hex digits
        if stripped.len() == 6 && stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
            return parse_hex6(stripped)
                .ok_or_else(|| AnalysisError::malformed(s, "invalid hex digits"));
        }

        let separated = stripped.replace(',', " ");
        let parts: Vec<&str> = separated.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(AnalysisError::malformed(
                s,
                "expected three components for RGB value",
            ));
        }

        let mut components = [0u8; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            let value: i64 = part
                .parse()
                .map_err(|_| AnalysisError::malformed(s, "RGB components must be integers"))?;
            if !(0..=255).contains(&value) {
                return Err(AnalysisError::malformed(
                    s,
                    "RGB components must be in range 0-255",
                ));
            }
            *slot = value as u8;
        }

        Ok(Rgb::new(components[0], components[1], components[2]))
    }
}

fn parse_hex6(hex: &str) -> Option<Rgb> {
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// A labeled color in a batch
///
/// The label is free-form: a source literal, or an identifier from the
/// highlighter cache. Labels are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    pub label: String,
    pub rgb: Rgb,
}

impl ColorSample {
    /// Create a sample from a label and color
    pub fn new(label: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            label: label.into(),
            rgb,
        }
    }

    /// Parse a literal into a sample labeled with the literal itself
    pub fn from_literal(literal: &str) -> Result<Self> {
        Ok(Self::new(literal, literal.parse()?))
    }
}
