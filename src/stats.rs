//! Descriptive statistics and distribution classification
//!
//! Turns a finite numeric sample into descriptive statistics and a
//! uniformity judgment:
//! - [`describe`] — min/max/mean/median/population std/quartiles
//! - [`classify`] — Kolmogorov–Smirnov goodness-of-fit against Uniform(0,1)
//!   on the min-max normalized sample, with explicit degenerate states for
//!   undersized or constant input

use serde::{Deserialize, Serialize};

use crate::constants::statistics::{
    KS_MIN_SAMPLES, KS_P_THRESHOLD, KS_STAT_THRESHOLD, MIN_CLASSIFY_SAMPLES,
};

/// Descriptive statistics of a non-empty numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// 25th percentile, linear interpolation
    pub q25: f64,
    /// 75th percentile, linear interpolation
    pub q75: f64,
}

/// Distribution shape classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Fewer than 3 samples; nothing can be said
    InsufficientData,
    /// Every sample is identical
    Constant,
    /// 3–7 samples: the KS test is underpowered and was not attempted
    Unknown,
    /// KS test not rejected (p > 0.05)
    UniformLike,
    /// Rejected, but the deviation is small (KS statistic < 0.2)
    FairlyUniform,
    NonUniform,
}

/// Classification result with the supporting test values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    pub classification: Classification,
    /// KS statistic against Uniform(0,1); present only when the test ran
    pub ks_statistic: Option<f64>,
    /// Asymptotic p-value for the KS statistic
    pub p_value: Option<f64>,
    /// Coefficient of variation (std / |mean|), absent when the mean is 0
    pub cv: Option<f64>,
    /// 100 × (1 − KS) when the test ran, 0 otherwise
    pub uniformity_score: f64,
}

/// Describe a numeric sample
///
/// Returns `None` for an empty sample; every statistic is defined for a
/// single sample and up.
pub fn describe(samples: &[f64]) -> Option<DistributionStats> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    Some(DistributionStats {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        median: percentile(&sorted, 50.0),
        std_dev: population_std(&sorted, mean),
        q25: percentile(&sorted, 25.0),
        q75: percentile(&sorted, 75.0),
    })
}

/// Classify a sample's distribution against Uniform(0,1)
///
/// The sample is min-max normalized before testing, so the judgment is
/// about shape, not scale. The coefficient of variation is computed from
/// the raw values whenever the mean is nonzero, regardless of sample size.
pub fn classify(samples: &[f64]) -> DistributionAnalysis {
    let cv = coefficient_of_variation(samples);

    if samples.len() < MIN_CLASSIFY_SAMPLES {
        return DistributionAnalysis {
            classification: Classification::InsufficientData,
            ks_statistic: None,
            p_value: None,
            cv,
            uniformity_score: 0.0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);

    if min == max {
        return DistributionAnalysis {
            classification: Classification::Constant,
            ks_statistic: None,
            p_value: None,
            cv,
            uniformity_score: 0.0,
        };
    }

    if sorted.len() < KS_MIN_SAMPLES {
        return DistributionAnalysis {
            classification: Classification::Unknown,
            ks_statistic: None,
            p_value: None,
            cv,
            uniformity_score: 0.0,
        };
    }

    let span = max - min;
    for value in &mut sorted {
        *value = (*value - min) / span;
    }

    let ks = ks_statistic_uniform(&sorted);
    let p = ks_p_value(ks, sorted.len());
    let classification = if p > KS_P_THRESHOLD {
        Classification::UniformLike
    } else if ks < KS_STAT_THRESHOLD {
        Classification::FairlyUniform
    } else {
        Classification::NonUniform
    };

    DistributionAnalysis {
        classification,
        ks_statistic: Some(ks),
        p_value: Some(p),
        cv,
        uniformity_score: 100.0 * (1.0 - ks),
    }
}

/// std / |mean| over the raw sample; `None` for empty input or zero mean
pub fn coefficient_of_variation(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    if mean == 0.0 {
        return None;
    }
    Some(population_std(samples, mean) / mean.abs())
}

fn population_std(samples: &[f64], mean: f64) -> f64 {
    let variance = samples
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

/// Percentile of a sorted sample by linear interpolation
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let fraction = rank - below as f64;
    if below + 1 < sorted.len() {
        sorted[below] + fraction * (sorted[below + 1] - sorted[below])
    } else {
        sorted[below]
    }
}

/// Max deviation between the empirical CDF and the Uniform(0,1) CDF
///
/// Input must be sorted and normalized to [0, 1].
fn ks_statistic_uniform(sorted: &[f64]) -> f64 {
    let n = sorted.len() as f64;
    let mut d: f64 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let cdf = x.clamp(0.0, 1.0);
        d = d.max((i as f64 + 1.0) / n - cdf).max(cdf - i as f64 / n);
    }
    d
}

/// Asymptotic two-sided KS p-value
///
/// Kolmogorov series Q(λ) = 2 Σ (−1)^{j−1} exp(−2 j² λ²) with the
/// small-sample correction λ = (√n + 0.12 + 0.11/√n) · D.
fn ks_p_value(d: f64, n: usize) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    if lambda < 1e-9 {
        return 1.0;
    }

    let mut sum = 0.0;
    let mut sign = 1.0;
    for j in 1..=100 {
        let term = sign * (-2.0 * (j as f64) * (j as f64) * lambda * lambda).exp();
        sum += term;
        if term.abs() < 1e-10 {
            break;
        }
        sign = -sign;
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_constant_sample() {
        let stats = describe(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.q25, 5.0);
        assert_eq!(stats.q75, 5.0);
    }

    #[test]
    fn test_describe_empty() {
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn test_describe_quartiles_interpolated() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.q25 - 1.75).abs() < 1e-12);
        assert!((stats.median - 2.5).abs() < 1e-12);
        assert!((stats.q75 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_describe_median_odd() {
        let stats = describe(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_describe_population_std() {
        // Population (not sample) std of [2, 4]: sqrt(((2-3)^2+(4-3)^2)/2) = 1
        let stats = describe(&[2.0, 4.0]).unwrap();
        assert!((stats.std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_classify_insufficient() {
        let analysis = classify(&[1.0, 2.0]);
        assert_eq!(analysis.classification, Classification::InsufficientData);
        assert!(analysis.ks_statistic.is_none());
        // CV is still reported for the undersized sample
        assert!(analysis.cv.is_some());
    }

    #[test]
    fn test_classify_constant() {
        let analysis = classify(&[1.0, 1.0, 1.0]);
        assert_eq!(analysis.classification, Classification::Constant);
        assert_eq!(analysis.uniformity_score, 0.0);
    }

    #[test]
    fn test_classify_underpowered() {
        let analysis = classify(&[1.0, 2.0, 9.0, 4.0, 6.0]);
        assert_eq!(analysis.classification, Classification::Unknown);
        assert!(analysis.ks_statistic.is_none());
        assert!(analysis.p_value.is_none());
        assert!(analysis.cv.is_some());
    }

    #[test]
    fn test_classify_even_grid_uniform_like() {
        let samples: Vec<f64> = (0..=20).map(f64::from).collect();
        let analysis = classify(&samples);
        assert_eq!(analysis.classification, Classification::UniformLike);
        assert!(analysis.p_value.unwrap() > 0.05);
        assert!(analysis.uniformity_score > 90.0);
    }

    #[test]
    fn test_classify_heavy_ties_non_uniform() {
        let mut samples = vec![0.0; 19];
        samples.push(1.0);
        let analysis = classify(&samples);
        assert_eq!(analysis.classification, Classification::NonUniform);
        assert!(analysis.ks_statistic.unwrap() > 0.5);
    }

    #[test]
    fn test_cv_value() {
        let analysis = classify(&[1.0, 2.0, 3.0]);
        // Population std sqrt(2/3) over mean 2
        let expected = (2.0f64 / 3.0).sqrt() / 2.0;
        assert!((analysis.cv.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cv_absent_for_zero_mean() {
        let analysis = classify(&[-1.0, 0.0, 1.0]);
        assert!(analysis.cv.is_none());
    }

    #[test]
    fn test_ks_p_value_extremes() {
        // Tiny deviation on a large sample: no evidence against uniformity
        assert!(ks_p_value(0.01, 100) > 0.9);
        // Gross deviation: decisive rejection
        assert!(ks_p_value(0.9, 100) < 1e-6);
    }
}
