//! Tunable scoring configuration
//!
//! The randomness scorer's constants are heuristics (the gap-CV target,
//! the per-factor caps, the histogram resolution) preserved from the
//! original calibration. They are exposed here as runtime parameters so
//! recalibration does not require a rebuild; the defaults reproduce the
//! original behavior exactly.
//!
//! ```no_run
//! use palette_audit::ScoringConfig;
//! use std::path::Path;
//!
//! let config = ScoringConfig::from_json_file(Path::new("scoring.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::scoring;

/// Parameters of the composite randomness score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Cap applied independently to each sub-score
    pub subscore_cap: f64,

    /// Minimum samples for a nonzero composite score
    pub min_samples: usize,

    /// Minimum samples before the entropy sub-score contributes
    pub entropy_min_samples: usize,

    /// Histogram bins per channel for the entropy sub-score
    pub histogram_bins: usize,

    /// Target coefficient of variation for sorted-ΔE gaps
    pub gap_cv_target: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            subscore_cap: scoring::SUBSCORE_CAP,
            min_samples: scoring::MIN_SCORE_SAMPLES,
            entropy_min_samples: scoring::ENTROPY_MIN_SAMPLES,
            histogram_bins: scoring::HISTOGRAM_BINS,
            gap_cv_target: scoring::GAP_CV_TARGET,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
