//! Full body-composition estimate
//!
//! Combines the US Navy body-fat estimate, Mifflin-St Jeor BMR and the
//! activity-level calorie table for one set of measurements.
//!
//! Rounding happens once, on the reported values. Fat mass is derived from
//! the full-precision body-fat percent and lean mass from the unrounded fat
//! mass, so `fat_mass_kg + lean_mass_kg` stays within 0.1 kg of the weight.

use crate::body_fat::{classify_body_fat, us_navy_body_fat, BodyFatCategory};
use crate::energy::{compute_daily_calorie_targets, mifflin_st_jeor_bmr, DailyCalorieTargets};
use crate::errors::MetricsResult;
use crate::health_metrics::{AnthropometricInput, BiologicalSex};
use crate::rounding::{round_to, round_whole};
use crate::validation::{require_hip, validate_age, validate_measurement};
use serde::{Deserialize, Serialize};

/// Body composition result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionResult {
    /// US Navy body fat, one decimal
    pub body_fat_percent: f64,
    /// Mifflin-St Jeor BMR, whole kcal/day
    pub bmr: f64,
    /// Lean mass in kg, one decimal
    pub lean_mass_kg: f64,
    /// Fat mass in kg, one decimal
    pub fat_mass_kg: f64,
    /// Category of the reported body fat percent
    pub category: BodyFatCategory,
    /// Calorie needs per activity level, from the unrounded BMR
    pub daily_calories: DailyCalorieTargets,
}

/// Check every field in reporting order, stopping at the first failure
fn validate_input(input: &AnthropometricInput) -> MetricsResult<()> {
    validate_measurement("weight_kg", input.weight_kg)?;
    validate_measurement("height_cm", input.height_cm)?;
    validate_age(input.age_years)?;
    validate_measurement("neck_cm", input.neck_cm)?;
    validate_measurement("waist_cm", input.waist_cm)?;
    if input.sex == BiologicalSex::Female {
        require_hip(input.hip_cm)?;
    }
    Ok(())
}

/// Calculate complete body composition
pub fn compute_body_composition(
    input: &AnthropometricInput,
) -> MetricsResult<BodyCompositionResult> {
    validate_input(input)?;

    let body_fat = us_navy_body_fat(
        input.height_cm,
        input.neck_cm,
        input.waist_cm,
        input.sex,
        input.hip_cm,
    )?;
    let bmr = mifflin_st_jeor_bmr(input.weight_kg, input.height_cm, input.age_years, input.sex)?;

    let fat_mass = input.weight_kg * body_fat / 100.0;
    let lean_mass = input.weight_kg - fat_mass;
    let body_fat_percent = round_to(body_fat, 1);

    Ok(BodyCompositionResult {
        body_fat_percent,
        bmr: round_whole(bmr),
        lean_mass_kg: round_to(lean_mass, 1),
        fat_mass_kg: round_to(fat_mass, 1),
        // classified on the reported percent so the label matches the number shown
        category: classify_body_fat(body_fat_percent, input.sex),
        daily_calories: compute_daily_calorie_targets(bmr),
    })
}
