//! Profile types shared by the calculators
//!
//! Provides the biological sex and activity level enums and the full set of
//! anthropometric measurements the body-composition calculator consumes.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Metric Units**: Inputs are kg, cm and years; no conversion layer
//! 3. **Type Safety**: Strong typing prevents unit confusion

use crate::errors::InvalidInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiologicalSex {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            "" => Err(InvalidInput::new("sex", "is required")),
            other => Err(InvalidInput::new(
                "sex",
                format!("'{}' is not one of: male, female", other),
            )),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for daily calorie targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Intense,
    /// Very hard exercise, physical job
    VeryIntense,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
        ActivityLevel::VeryIntense,
    ];

    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::VeryIntense => 1.9,
        }
    }

    /// Get a human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Intense => "Very active",
            ActivityLevel::VeryIntense => "Extremely active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Intense => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryIntense => "Very hard exercise or physical job",
        }
    }
}

// ============================================================================
// Anthropometric Input
// ============================================================================

/// Measurements needed for a full body-composition estimate
///
/// All values are metric. `hip_cm` is only consulted for females.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Neck circumference in centimeters
    pub neck_cm: f64,
    /// Waist circumference in centimeters
    pub waist_cm: f64,
    /// Hip circumference in centimeters (females only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}
