//! Raw calculator form fields
//!
//! The page keeps whatever the user typed as strings and only hands them
//! over when a calculation is requested. These types parse that buffer into
//! typed calculator input, naming the first field that fails.

use crate::errors::MetricsResult;
use crate::health_metrics::{AnthropometricInput, BiologicalSex};
use crate::validation::{parse_age, parse_measurement, parse_sex};
use serde::{Deserialize, Serialize};

/// BMI form: weight (kg) and height (cm)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
}

impl BmiForm {
    /// Parsed `(weight_kg, height_cm)`
    pub fn parse(&self) -> MetricsResult<(f64, f64)> {
        Ok((
            parse_measurement("weight_kg", &self.weight)?,
            parse_measurement("height_cm", &self.height)?,
        ))
    }
}

/// BMR form: weight, height, age and sex
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmrForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub sex: String,
}

impl BmrForm {
    /// Parsed `(weight_kg, height_cm, age_years, sex)`
    pub fn parse(&self) -> MetricsResult<(f64, f64, u32, BiologicalSex)> {
        Ok((
            parse_measurement("weight_kg", &self.weight)?,
            parse_measurement("height_cm", &self.height)?,
            parse_age(&self.age)?,
            parse_sex(&self.sex)?,
        ))
    }
}

/// Body fat and BMR form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCompositionForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub neck: String,
    #[serde(default)]
    pub waist: String,
    /// Only shown, and only read, for female selections
    #[serde(default)]
    pub hip: Option<String>,
}

impl BodyCompositionForm {
    pub fn parse(&self) -> MetricsResult<AnthropometricInput> {
        let weight_kg = parse_measurement("weight_kg", &self.weight)?;
        let height_cm = parse_measurement("height_cm", &self.height)?;
        let age_years = parse_age(&self.age)?;
        let sex = parse_sex(&self.sex)?;
        let neck_cm = parse_measurement("neck_cm", &self.neck)?;
        let waist_cm = parse_measurement("waist_cm", &self.waist)?;
        let hip_cm = match sex {
            BiologicalSex::Female => Some(parse_measurement(
                "hip_cm",
                self.hip.as_deref().unwrap_or_default(),
            )?),
            BiologicalSex::Male => None,
        };

        Ok(AnthropometricInput {
            weight_kg,
            height_cm,
            age_years,
            sex,
            neck_cm,
            waist_cm,
            hip_cm,
        })
    }
}
