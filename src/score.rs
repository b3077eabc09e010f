//! Composite randomness scoring
//!
//! Judges whether a batch of colors looks randomly placed in LAB space.
//! Four additive factors, each capped independently:
//! - uniformity: KS-based per-channel uniformity of L, a, b, ΔE
//! - coverage: fraction of the nominal LAB ranges the batch spans
//! - spacing: coefficient of variation of sorted-ΔE gaps against the
//!   Poisson-process expectation
//! - entropy: binned Shannon entropy of L, a, b over their observed ranges
//!
//! Factor availability depends on sample size; an absent factor is absent
//! from the sum, not zero. The composite is therefore always in [0, 100].

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::constants::{ranges, scoring};
use crate::stats::{classify, coefficient_of_variation, describe};

/// Parallel per-sample channel values for one batch
///
/// The four vectors must have equal length: index i holds sample i's
/// lightness, chroma axes, and ΔE against the shared background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSamples {
    pub l: Vec<f64>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub delta_e: Vec<f64>,
}

impl ChannelSamples {
    /// Number of samples in the batch
    pub fn len(&self) -> usize {
        self.l.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }
}

/// Interpretation bucket for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpretation {
    HighlyRandom,
    ModeratelyRandom,
    SomewhatRandom,
    LowRandomness,
}

impl Interpretation {
    fn from_total(total: f64) -> Self {
        if total >= scoring::HIGHLY_RANDOM_THRESHOLD {
            Self::HighlyRandom
        } else if total >= scoring::MODERATELY_RANDOM_THRESHOLD {
            Self::ModeratelyRandom
        } else if total >= scoring::SOMEWHAT_RANDOM_THRESHOLD {
            Self::SomewhatRandom
        } else {
            Self::LowRandomness
        }
    }

    /// Presentation label
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRandom => "highly random",
            Self::ModeratelyRandom => "moderately random",
            Self::SomewhatRandom => "somewhat random",
            Self::LowRandomness => "low randomness",
        }
    }
}

/// Composite randomness score with its per-factor breakdown
///
/// `spacing` and `entropy` are `None` when their sample-size requirements
/// were not met; they contributed nothing to `total` in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomnessScore {
    pub uniformity: f64,
    pub coverage: f64,
    pub spacing: Option<f64>,
    pub entropy: Option<f64>,
    pub total: f64,
    pub interpretation: Interpretation,
}

impl RandomnessScore {
    fn degenerate() -> Self {
        Self {
            uniformity: 0.0,
            coverage: 0.0,
            spacing: None,
            entropy: None,
            total: 0.0,
            interpretation: Interpretation::LowRandomness,
        }
    }
}

/// Scorer over four parallel channels (L, a, b, ΔE)
#[derive(Debug, Default, Clone)]
pub struct RandomnessScorer {
    config: ScoringConfig,
}

impl RandomnessScorer {
    /// Create a scorer with the calibrated defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom parameters
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one batch
    ///
    /// Fewer than `min_samples` inputs is a defined degenerate case: the
    /// score is 0 with both optional factors absent, not an error.
    pub fn score(&self, channels: &ChannelSamples) -> RandomnessScore {
        if channels.len() < self.config.min_samples {
            return RandomnessScore::degenerate();
        }

        let uniformity = self.uniformity_factor(channels);
        let coverage = self.coverage_factor(channels);
        let spacing = self.spacing_factor(&channels.delta_e);
        let entropy = self.entropy_factor(channels);

        let total =
            uniformity + coverage + spacing.unwrap_or(0.0) + entropy.unwrap_or(0.0);
        RandomnessScore {
            uniformity,
            coverage,
            spacing,
            entropy,
            total,
            interpretation: Interpretation::from_total(total),
        }
    }

    /// Per-channel KS uniformity, averaged across the four channels
    ///
    /// A channel whose classification carries a KS statistic contributes
    /// (1 − KS) × cap / 4; a channel without one (constant, undersized)
    /// contributes 0.
    fn uniformity_factor(&self, channels: &ChannelSamples) -> f64 {
        let per_channel_cap = self.config.subscore_cap / 4.0;
        let mut total = 0.0;
        for samples in [&channels.l, &channels.a, &channels.b, &channels.delta_e] {
            if let Some(ks) = classify(samples).ks_statistic {
                total += (1.0 - ks) * per_channel_cap;
            }
        }
        total.min(self.config.subscore_cap)
    }

    /// Fraction of the nominal LAB ranges spanned, averaged over L, a, b
    fn coverage_factor(&self, channels: &ChannelSamples) -> f64 {
        let spans = [
            (&channels.l, ranges::L_SPAN),
            (&channels.a, ranges::AB_SPAN),
            (&channels.b, ranges::AB_SPAN),
        ];
        let mut fraction_sum = 0.0;
        for (samples, nominal) in spans {
            if let Some(stats) = describe(samples) {
                fraction_sum += (stats.max - stats.min) / nominal;
            }
        }
        (fraction_sum / 3.0 * self.config.subscore_cap).min(self.config.subscore_cap)
    }

    /// Gap regularity of the sorted ΔE sample
    ///
    /// Truly random 1-D placement has a gap CV near the Poisson target;
    /// far below means artificial regularity, far above means clustering.
    /// Absent with fewer than two gaps, or when every gap is zero.
    fn spacing_factor(&self, delta_e: &[f64]) -> Option<f64> {
        if delta_e.len() < 3 {
            return None;
        }
        let mut sorted = delta_e.to_vec();
        sorted.sort_by(f64::total_cmp);
        let gaps: Vec<f64> = sorted.windows(2).map(|pair| pair[1] - pair[0]).collect();

        let cv = coefficient_of_variation(&gaps)?;
        let score = self.config.subscore_cap * (-(cv - self.config.gap_cv_target).abs()).exp();
        Some(score.min(self.config.subscore_cap))
    }

    /// Normalized Shannon entropy of L, a, b histograms
    ///
    /// Each channel is binned over its own observed range; entropy in bits
    /// is normalized by log2(bins) and averaged across the three channels.
    fn entropy_factor(&self, channels: &ChannelSamples) -> Option<f64> {
        if channels.len() < self.config.entropy_min_samples {
            return None;
        }
        let bins = self.config.histogram_bins;
        let normalized_sum: f64 = [&channels.l, &channels.a, &channels.b]
            .into_iter()
            .map(|samples| binned_entropy_bits(samples, bins) / (bins as f64).log2())
            .sum();
        Some((normalized_sum / 3.0 * self.config.subscore_cap).min(self.config.subscore_cap))
    }
}

/// Shannon entropy (bits) of an equal-width histogram over the observed range
fn binned_entropy_bits(samples: &[f64], bins: usize) -> f64 {
    let Some(stats) = describe(samples) else {
        return 0.0;
    };
    let span = stats.max - stats.min;
    if span == 0.0 {
        return 0.0;
    }

    let mut counts = vec![0usize; bins];
    for &value in samples {
        let index = (((value - stats.min) / span) * bins as f64) as usize;
        counts[index.min(bins - 1)] += 1;
    }

    let n = samples.len() as f64;
    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}
