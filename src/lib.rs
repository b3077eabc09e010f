//! # Palette Audit
//!
//! A Rust crate for judging color palettes perceptually: are the colors
//! well separated from a background, and do they look randomly placed in
//! LAB space rather than patterned?
//!
//! The library provides:
//! - RGB literal parsing and RGB → CIELAB conversion (D65)
//! - CIEDE2000 perceptual difference against a background color
//! - Extraction of identifier → color mappings from a highlighter's
//!   persisted cache file
//! - Per-channel descriptive statistics with a uniformity classification
//! - A composite 0–100 randomness score with a per-factor breakdown
//!
//! ## Example
//!
//! ```rust,no_run
//! use palette_audit::{analyze_palette, ColorSample, Rgb};
//!
//! let samples = vec![
//!     ColorSample::from_literal("#ff0000")?,
//!     ColorSample::from_literal("12,34,56")?,
//!     ColorSample::from_literal("200 200 200")?,
//! ];
//! let report = analyze_palette(&samples, Rgb::new(30, 30, 30));
//! println!("randomness: {:.1}/100", report.randomness.total);
//! # Ok::<(), palette_audit::AnalysisError>(())
//! ```
//!
//! Every call is a pure function of its inputs; the only I/O in the crate
//! is the cache file read in [`samples_from_cache`].

use palette::Lab;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod cache;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod score;
pub mod stats;

pub use cache::{load_cache_colors, CacheScanner};
pub use color::{delta_e_2000, ColorConverter, ColorSample, Rgb};
pub use config::ScoringConfig;
pub use error::{AnalysisError, Result};
pub use score::{ChannelSamples, Interpretation, RandomnessScore, RandomnessScorer};
pub use stats::{classify, describe, Classification, DistributionAnalysis, DistributionStats};

/// Analysis of a single color against the background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Source literal or cache identifier
    pub label: String,
    pub rgb: Rgb,
    pub hex: String,
    /// CIELAB coordinates under D65
    pub lab: Lab,
    /// CIEDE2000 difference against the batch background
    pub delta_e_bg: f32,
}

/// The background the batch was judged against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundInfo {
    pub rgb: Rgb,
    pub hex: String,
    pub lab: Lab,
}

/// Statistics and classification for one channel of the batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub stats: DistributionStats,
    pub analysis: DistributionAnalysis,
}

/// Per-channel breakdown across L, a, b, and ΔE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelBreakdown {
    pub l: ChannelReport,
    pub a: ChannelReport,
    pub b: ChannelReport,
    pub delta_e: ChannelReport,
}

/// Complete batch analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteReport {
    pub background: BackgroundInfo,
    pub colors: Vec<ColorReport>,
    /// Absent for an empty batch
    pub channels: Option<ChannelBreakdown>,
    pub randomness: RandomnessScore,
}

/// Analyze one color against a background
pub fn analyze_color(sample: &ColorSample, background: Rgb) -> ColorReport {
    let converter = ColorConverter::new();
    let lab = converter.rgb_to_lab(sample.rgb);
    let background_lab = converter.rgb_to_lab(background);
    ColorReport {
        label: sample.label.clone(),
        rgb: sample.rgb,
        hex: sample.rgb.hex(),
        lab,
        delta_e_bg: delta_e_2000(lab, background_lab),
    }
}

/// Analyze a batch of colors against a shared background
///
/// Converts every sample to LAB, computes its ΔE against the background,
/// then runs the per-channel statistics and the composite randomness
/// score. An undersized batch yields the defined degenerate score of 0
/// rather than an error.
pub fn analyze_palette(samples: &[ColorSample], background: Rgb) -> PaletteReport {
    let converter = ColorConverter::new();
    let background_lab = converter.rgb_to_lab(background);

    let colors: Vec<ColorReport> = samples
        .iter()
        .map(|sample| {
            let lab = converter.rgb_to_lab(sample.rgb);
            ColorReport {
                label: sample.label.clone(),
                rgb: sample.rgb,
                hex: sample.rgb.hex(),
                lab,
                delta_e_bg: delta_e_2000(lab, background_lab),
            }
        })
        .collect();

    let mut channels = ChannelSamples::default();
    for report in &colors {
        channels.l.push(report.lab.l as f64);
        channels.a.push(report.lab.a as f64);
        channels.b.push(report.lab.b as f64);
        channels.delta_e.push(report.delta_e_bg as f64);
    }

    PaletteReport {
        background: BackgroundInfo {
            rgb: background,
            hex: background.hex(),
            lab: background_lab,
        },
        colors,
        channels: channel_breakdown(&channels),
        randomness: RandomnessScorer::new().score(&channels),
    }
}

/// Parse a batch of color literals, isolating per-item failures
///
/// Bad literals never abort the batch: the caller receives every sample
/// that parsed alongside every error that occurred, in input order.
pub fn parse_samples<'a, I>(literals: I) -> (Vec<ColorSample>, Vec<AnalysisError>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut samples = Vec::new();
    let mut errors = Vec::new();
    for literal in literals {
        match ColorSample::from_literal(literal) {
            Ok(sample) => samples.push(sample),
            Err(error) => errors.push(error),
        }
    }
    (samples, errors)
}

/// Load samples from a highlighter cache file, ordered by RGB tuple
///
/// Cache-load failures are fatal to this call only; directly supplied
/// colors in the same batch are unaffected because they never pass
/// through here.
pub fn samples_from_cache(path: &Path) -> Result<Vec<ColorSample>> {
    let entries = load_cache_colors(path)?;
    let mut samples: Vec<ColorSample> = entries
        .into_iter()
        .filter_map(|(name, hex)| {
            // The entry pattern already guarantees a valid hex value;
            // a failure here is isolated like any other bad literal
            hex.parse::<Rgb>()
                .ok()
                .map(|rgb| ColorSample::new(name, rgb))
        })
        .collect();
    samples.sort_by(|x, y| x.rgb.cmp(&y.rgb).then_with(|| x.label.cmp(&y.label)));
    Ok(samples)
}

fn channel_report(samples: &[f64]) -> Option<ChannelReport> {
    Some(ChannelReport {
        stats: describe(samples)?,
        analysis: classify(samples),
    })
}

fn channel_breakdown(channels: &ChannelSamples) -> Option<ChannelBreakdown> {
    Some(ChannelBreakdown {
        l: channel_report(&channels.l)?,
        a: channel_report(&channels.a)?,
        b: channel_report(&channels.b)?,
        delta_e: channel_report(&channels.delta_e)?,
    })
}
