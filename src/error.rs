//! Error types for the palette_audit library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for palette_audit operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color parsing and cache extraction
///
/// Statistical degenerate cases (too few samples) are not errors; they are
/// represented as explicit states in the statistics and scoring results.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A color literal could not be parsed into an RGB triple
    #[error("Malformed color literal {literal:?}: {reason}")]
    MalformedColorLiteral { literal: String, reason: String },

    /// The cache path does not resolve to a regular file
    #[error("Cache file not found: {path}")]
    CacheFileMissing { path: PathBuf },

    /// The cache file contains no colors block
    #[error("Could not locate a colors table in cache file: {path}")]
    CacheBlockNotFound { path: PathBuf },

    /// The colors block was found but yielded no entries
    #[error("No colors found in cache file: {path}")]
    CacheBlockEmpty { path: PathBuf },

    /// Reading the cache file failed mid-scan
    #[error("Failed to read cache file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// Create a malformed-literal error with context
    pub fn malformed(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedColorLiteral {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// A malformed literal can be skipped while the rest of a batch
    /// continues; cache failures abort only the cache-derived portion.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::MalformedColorLiteral { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MalformedColorLiteral { literal, .. } => {
                format!(
                    "Could not read {:?} as a color. Use RRGGBB hex (with or without '#') or three 0-255 components.",
                    literal
                )
            }
            AnalysisError::CacheFileMissing { path } => {
                format!("No cache file at {}. Check the path.", path.display())
            }
            AnalysisError::CacheBlockNotFound { .. } => {
                "The cache file has no [\"colors\"] table. Was it written by the highlighter?"
                    .to_string()
            }
            AnalysisError::CacheBlockEmpty { .. } => {
                "The colors table in the cache file is empty.".to_string()
            }
            AnalysisError::Io { .. } => "Reading the cache file failed.".to_string(),
        }
    }
}
