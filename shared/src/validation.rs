//! Input validation functions
//!
//! Per-field checks shared by every calculator, plus parsers for the raw
//! strings a form field hands over.

use crate::errors::{InvalidInput, MetricsResult};
use crate::health_metrics::BiologicalSex;

/// Validate a body measurement (kg or cm): finite and strictly positive
pub fn validate_measurement(field: &'static str, value: f64) -> MetricsResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(InvalidInput::new(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(InvalidInput::new(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Validate age in whole years (at least 1)
pub fn validate_age(age_years: u32) -> MetricsResult<u32> {
    if age_years < 1 {
        return Err(InvalidInput::new("age_years", "must be at least 1 year"));
    }
    Ok(age_years)
}

/// Validate the hip circumference the female body-fat formula needs
pub fn require_hip(hip_cm: Option<f64>) -> MetricsResult<f64> {
    match hip_cm {
        Some(hip) => validate_measurement("hip_cm", hip),
        None => Err(InvalidInput::new(
            "hip_cm",
            "required for female body-fat estimate",
        )),
    }
}

/// Parse a measurement typed into a form field
pub fn parse_measurement(field: &'static str, raw: &str) -> MetricsResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new(field, "is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InvalidInput::new(field, format!("'{}' is not a number", trimmed)))?;
    validate_measurement(field, value)
}

/// Parse an age typed into a form field
pub fn parse_age(raw: &str) -> MetricsResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new("age_years", "is required"));
    }
    let age: u32 = trimmed.parse().map_err(|_| {
        InvalidInput::new(
            "age_years",
            format!("'{}' is not a whole number of years", trimmed),
        )
    })?;
    validate_age(age)
}

/// Parse a biological sex selection
pub fn parse_sex(raw: &str) -> MetricsResult<BiologicalSex> {
    raw.parse()
}
