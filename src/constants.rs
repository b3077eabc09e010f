//! Reference values and tunable constants for palette analysis
//!
//! This module contains compile-time constants for color reference data,
//! distribution classification, and randomness scoring. The scoring values
//! are heuristics without a cited derivation; `ScoringConfig` exposes them
//! as runtime parameters with these defaults.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. All LAB values in this crate are relative to
/// D65, matching the `palette` crate's sRGB conversion chain.
pub mod d65 {
    /// D65 white point in CIE XYZ color space (array form)
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f32; 3] = [0.95047, 1.00000, 1.08883];

    /// Correlated Color Temperature of D65 in Kelvin
    pub const CCT_KELVIN: f32 = 6504.0;
}

/// Nominal CIELAB axis spans used by the coverage sub-score
pub mod ranges {
    /// Nominal lightness span (L* in [0, 100])
    pub const L_SPAN: f64 = 100.0;

    /// Nominal chroma-axis span (a*, b* roughly in [-128, 127])
    pub const AB_SPAN: f64 = 255.0;
}

/// Distribution classification thresholds
pub mod statistics {
    /// Minimum samples for any classification beyond insufficient-data
    pub const MIN_CLASSIFY_SAMPLES: usize = 3;

    /// Minimum samples before the KS test has any power
    pub const KS_MIN_SAMPLES: usize = 8;

    /// p-value above which a sample is called uniform-like
    pub const KS_P_THRESHOLD: f64 = 0.05;

    /// KS statistic below which a failed test is still fairly uniform
    pub const KS_STAT_THRESHOLD: f64 = 0.2;
}

/// Randomness scoring parameters
///
/// Each sub-score is capped independently; the composite is their sum.
/// The gap-CV target matches the inter-point spacing of a Poisson process.
pub mod scoring {
    /// Cap applied to every sub-score
    pub const SUBSCORE_CAP: f64 = 25.0;

    /// Minimum samples for a nonzero composite score
    pub const MIN_SCORE_SAMPLES: usize = 3;

    /// Minimum samples before the entropy sub-score is computed
    pub const ENTROPY_MIN_SAMPLES: usize = 5;

    /// Histogram bins per channel for the entropy sub-score
    pub const HISTOGRAM_BINS: usize = 10;

    /// Target coefficient of variation for sorted-ΔE gaps
    pub const GAP_CV_TARGET: f64 = 0.75;

    /// Interpretation bucket thresholds
    pub const HIGHLY_RANDOM_THRESHOLD: f64 = 75.0;
    pub const MODERATELY_RANDOM_THRESHOLD: f64 = 60.0;
    pub const SOMEWHAT_RANDOM_THRESHOLD: f64 = 40.0;
}
