//! Error types for the studio metrics calculators

use serde::Serialize;
use thiserror::Error;

/// Rejected calculator input
///
/// Every failure of the calculators is an input problem: a missing field, a
/// non-positive measurement, a sex-specific field left out, circumferences
/// the body-fat formula cannot take a logarithm of, or magnitudes that
/// overflow. Callers should re-prompt for corrected measurements; there is
/// never a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Invalid input for {field}: {reason}")]
pub struct InvalidInput {
    /// Name of the offending field (`weight_kg`, `hip_cm`, ...)
    pub field: &'static str,
    /// Human-readable reason
    pub reason: String,
}

impl InvalidInput {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Input that made the body-fat formula leave its domain
    pub fn inconsistent(field: &'static str) -> Self {
        Self::new(field, "measurements inconsistent")
    }
}

/// Result alias for calculator operations
pub type MetricsResult<T> = Result<T, InvalidInput>;
