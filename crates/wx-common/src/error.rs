//! Error types for the weather chart pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart generation.
///
/// Rejected samples are not represented here: failing a metric's acceptance
/// predicate is a normal filtering outcome, not an error.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Input Errors ===
    #[error("Log file unavailable: {}", path.display())]
    LogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // === Configuration Errors ===
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid policy for '{metric}': {message}")]
    InvalidPolicy { metric: String, message: String },

    // === Rendering Errors ===
    #[error("Degenerate value range: min={min} max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("Image encoding failed: {0}")]
    Encode(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Create a MalformedRecord error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an InvalidPolicy error.
    pub fn invalid_policy(metric: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            metric: metric.into(),
            message: message.into(),
        }
    }

    /// True when the error comes from a day's log rather than configuration
    /// or rendering.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ChartError::LogUnavailable { .. } | ChartError::MalformedRecord { .. }
        )
    }
}

impl From<serde_yaml::Error> for ChartError {
    fn from(err: serde_yaml::Error) -> Self {
        ChartError::invalid_policy("<yaml>", err.to_string())
    }
}
