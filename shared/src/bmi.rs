//! Body Mass Index calculator
//!
//! BMI = weight(kg) / height(m)², reported to two decimals, classified into
//! the WHO adult bands, with the weight range that keeps BMI in the normal
//! band for the same height.

use crate::bands::BandTable;
use crate::errors::{InvalidInput, MetricsResult};
use crate::rounding::round_to;
use crate::validation::validate_measurement;
use serde::{Deserialize, Serialize};

/// Lower edge of the normal band used for the ideal weight range
pub const IDEAL_BMI_MIN: f64 = 18.5;

/// Upper edge of the ideal weight range (the normal band tops out just below 25)
pub const IDEAL_BMI_MAX: f64 = 24.9;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiClassification {
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obese-I")]
    ObeseClassI,
    #[serde(rename = "obese-II")]
    ObeseClassII,
    #[serde(rename = "obese-III")]
    ObeseClassIII,
}

const BMI_BANDS: BandTable<BmiClassification> = BandTable::new(
    &[
        (18.5, BmiClassification::Underweight),
        (25.0, BmiClassification::Normal),
        (30.0, BmiClassification::Overweight),
        (35.0, BmiClassification::ObeseClassI),
        (40.0, BmiClassification::ObeseClassII),
    ],
    BmiClassification::ObeseClassIII,
);

impl BmiClassification {
    /// Get the `[lower, upper)` BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        BMI_BANDS
            .range(*self)
            .map(|(lower, upper)| (lower.max(0.0), upper))
            .unwrap_or((0.0, f64::INFINITY))
    }

    /// Get a human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "Underweight",
            BmiClassification::Normal => "Normal weight",
            BmiClassification::Overweight => "Overweight",
            BmiClassification::ObeseClassI => "Obesity Class I",
            BmiClassification::ObeseClassII => "Obesity Class II",
            BmiClassification::ObeseClassIII => "Obesity Class III",
        }
    }

    /// Guidance shown alongside the result
    pub fn advice(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => {
                "You are below the ideal weight. Consider consulting a nutritionist."
            }
            BmiClassification::Normal => "You are within the ideal weight for your height.",
            BmiClassification::Overweight => {
                "You are overweight. A balanced diet and exercise can help."
            }
            BmiClassification::ObeseClassI => {
                "Class I obesity. Medical and nutritional follow-up is recommended."
            }
            BmiClassification::ObeseClassII => {
                "Class II obesity. Seek specialised medical guidance."
            }
            BmiClassification::ObeseClassIII => {
                "Class III obesity. Seek medical follow-up urgently."
            }
        }
    }
}

/// Weight interval in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl WeightRange {
    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_kg && weight_kg <= self.max_kg
    }
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI value (kg/m²), two decimals
    pub value: f64,
    /// Band containing `value`
    pub classification: BmiClassification,
    /// Weights giving a BMI of 18.5-24.9 at this height, one decimal
    pub ideal_weight_range_kg: WeightRange,
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiClassification {
    BMI_BANDS.classify(bmi)
}

/// Ideal weight range for a height, rounded to one decimal
pub fn ideal_weight_range_kg(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    WeightRange {
        min_kg: round_to(IDEAL_BMI_MIN * height_m_sq, 1),
        max_kg: round_to(IDEAL_BMI_MAX * height_m_sq, 1),
    }
}

/// Calculate complete BMI result
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> MetricsResult<BmiResult> {
    let weight_kg = validate_measurement("weight_kg", weight_kg)?;
    let height_cm = validate_measurement("height_cm", height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(InvalidInput::new("weight_kg", "too large for a BMI"));
    }
    let ideal_weight_range_kg = ideal_weight_range_kg(height_cm);
    if !ideal_weight_range_kg.max_kg.is_finite() {
        return Err(InvalidInput::new("height_cm", "too large for a BMI"));
    }
    let value = round_to(bmi, 2);

    Ok(BmiResult {
        value,
        classification: classify_bmi(value),
        ideal_weight_range_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> 22.857... -> 22.86
        let result = compute_bmi(70.0, 175.0).unwrap();
        assert_eq!(result.value, 22.86);
        assert_eq!(result.classification, BmiClassification::Normal);
    }

    #[rstest]
    #[case(1e308, 10.0, "weight_kg")]
    #[case(f64::MAX, 50.0, "weight_kg")]
    #[case(70.0, 1e307, "height_cm")]
    fn test_overflowing_inputs_rejected(
        #[case] weight: f64,
        #[case] height: f64,
        #[case] field: &str,
    ) {
        let err = compute_bmi(weight, height).unwrap_err();
        assert_eq!(err.field, field);
    }

    #[test]
    fn test_huge_weight_stays_finite() {
        let result = compute_bmi(1e307, 100.0).unwrap();
        assert!(result.value.is_finite());
        assert_eq!(result.classification, BmiClassification::ObeseClassIII);
    }

    #[test]
    fn test_ideal_weight_range() {
        // 1.75² = 3.0625 -> 56.65625 / 76.25625
        let result = compute_bmi(70.0, 175.0).unwrap();
        assert_eq!(
            result.ideal_weight_range_kg,
            WeightRange {
                min_kg: 56.7,
                max_kg: 76.3
            }
        );
    }

    #[rstest]
    #[case(10.0, BmiClassification::Underweight)]
    #[case(18.49, BmiClassification::Underweight)]
    #[case(18.5, BmiClassification::Normal)]
    #[case(24.99, BmiClassification::Normal)]
    #[case(25.0, BmiClassification::Overweight)]
    #[case(29.99, BmiClassification::Overweight)]
    #[case(30.0, BmiClassification::ObeseClassI)]
    #[case(35.0, BmiClassification::ObeseClassII)]
    #[case(39.99, BmiClassification::ObeseClassII)]
    #[case(40.0, BmiClassification::ObeseClassIII)]
    #[case(75.0, BmiClassification::ObeseClassIII)]
    fn test_bmi_band_boundaries(#[case] bmi: f64, #[case] expected: BmiClassification) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_exact_boundary_from_measurements() {
        // 100 cm tall: BMI equals weight
        assert_eq!(
            compute_bmi(18.5, 100.0).unwrap().classification,
            BmiClassification::Normal
        );
        assert_eq!(
            compute_bmi(25.0, 100.0).unwrap().classification,
            BmiClassification::Overweight
        );
    }

    #[rstest]
    #[case(0.0, 175.0, "weight_kg")]
    #[case(-70.0, 175.0, "weight_kg")]
    #[case(70.0, 0.0, "height_cm")]
    #[case(70.0, -175.0, "height_cm")]
    #[case(f64::NAN, 175.0, "weight_kg")]
    fn test_invalid_input(#[case] weight: f64, #[case] height: f64, #[case] field: &str) {
        let err = compute_bmi(weight, height).unwrap_err();
        assert_eq!(err.field, field);
    }

    #[test]
    fn test_category_ranges() {
        assert_eq!(BmiClassification::Underweight.range(), (0.0, 18.5));
        assert_eq!(BmiClassification::Normal.range(), (18.5, 25.0));
        assert_eq!(BmiClassification::ObeseClassIII.range(), (40.0, f64::INFINITY));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(compute_bmi(70.0, 175.0).unwrap()).unwrap();
        assert_eq!(json["value"], 22.86);
        assert_eq!(json["classification"], "normal");
        assert_eq!(json["idealWeightRangeKg"]["minKg"], 56.7);
        assert_eq!(
            serde_json::to_string(&BmiClassification::ObeseClassII).unwrap(),
            "\"obese-II\""
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: value is weight / m² rounded to two decimals
        #[test]
        fn prop_bmi_matches_formula(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            let result = compute_bmi(weight, height).unwrap();
            let height_m = height / 100.0;
            let expected = (weight / (height_m * height_m) * 100.0).round() / 100.0;
            prop_assert_eq!(result.value, expected);
        }

        /// Property: classification is the band whose range contains the value
        #[test]
        fn prop_classification_matches_band(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            let result = compute_bmi(weight, height).unwrap();
            let (lower, upper) = result.classification.range();
            prop_assert!(result.value >= lower && result.value < upper);
        }

        /// Property: identical inputs give identical results
        #[test]
        fn prop_bmi_idempotent(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            prop_assert_eq!(compute_bmi(weight, height), compute_bmi(weight, height));
        }
    }
}
