//! BMR and daily calorie targets
//!
//! Basal Metabolic Rate via Mifflin-St Jeor, scaled by the fixed activity
//! multipliers to estimate total daily energy expenditure.

use crate::errors::MetricsResult;
use crate::health_metrics::{ActivityLevel, BiologicalSex};
use crate::rounding::round_whole;
use crate::validation::{validate_age, validate_measurement};
use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor BMR at full precision (kcal/day)
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn mifflin_st_jeor_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
) -> MetricsResult<f64> {
    let weight_kg = validate_measurement("weight_kg", weight_kg)?;
    let height_cm = validate_measurement("height_cm", height_cm)?;
    let age_years = validate_age(age_years)?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    Ok(match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    })
}

/// Basal Metabolic Rate rounded to the nearest kcal
pub fn compute_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
) -> MetricsResult<f64> {
    mifflin_st_jeor_bmr(weight_kg, height_cm, age_years, sex).map(round_whole)
}

/// Daily calorie needs per activity level (kcal/day)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCalorieTargets {
    pub sedentary: f64,
    pub light: f64,
    pub moderate: f64,
    pub intense: f64,
    pub very_intense: f64,
}

impl DailyCalorieTargets {
    pub fn get(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::VeryIntense => self.very_intense,
        }
    }

    /// `(level, kcal)` pairs from least to most active
    pub fn iter(&self) -> impl Iterator<Item = (ActivityLevel, f64)> + '_ {
        ActivityLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// Scale a BMR by every activity multiplier, rounding each target
pub fn compute_daily_calorie_targets(bmr: f64) -> DailyCalorieTargets {
    let target = |level: ActivityLevel| round_whole(bmr * level.multiplier());
    DailyCalorieTargets {
        sedentary: target(ActivityLevel::Sedentary),
        light: target(ActivityLevel::Light),
        moderate: target(ActivityLevel::Moderate),
        intense: target(ActivityLevel::Intense),
        very_intense: target(ActivityLevel::VeryIntense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmr_mifflin_male() {
        // 700 + 1093.75 - 150 + 5 = 1648.75
        assert_eq!(compute_bmr(70.0, 175.0, 30, BiologicalSex::Male), Ok(1649.0));
        assert_eq!(
            mifflin_st_jeor_bmr(70.0, 175.0, 30, BiologicalSex::Male),
            Ok(1648.75)
        );
    }

    #[test]
    fn test_bmr_mifflin_female() {
        // 700 + 1093.75 - 150 - 161 = 1482.75
        assert_eq!(compute_bmr(70.0, 175.0, 30, BiologicalSex::Female), Ok(1483.0));
    }

    #[test]
    fn test_bmr_rejects_invalid_input() {
        assert_eq!(
            compute_bmr(0.0, 175.0, 30, BiologicalSex::Male).unwrap_err().field,
            "weight_kg"
        );
        assert_eq!(
            compute_bmr(70.0, -1.0, 30, BiologicalSex::Male).unwrap_err().field,
            "height_cm"
        );
        assert_eq!(
            compute_bmr(70.0, 175.0, 0, BiologicalSex::Male).unwrap_err().field,
            "age_years"
        );
    }

    #[test]
    fn test_daily_calorie_targets() {
        let targets = compute_daily_calorie_targets(1649.0);
        assert_eq!(
            targets,
            DailyCalorieTargets {
                sedentary: 1979.0,
                light: 2267.0,
                moderate: 2556.0,
                intense: 2845.0,
                very_intense: 3133.0,
            }
        );
    }

    #[test]
    fn test_targets_lookup_and_order() {
        let targets = compute_daily_calorie_targets(1649.0);
        assert_eq!(targets.get(ActivityLevel::Moderate), 2556.0);
        let levels: Vec<_> = targets.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, ActivityLevel::ALL.to_vec());
    }

    #[test]
    fn test_targets_serialized_keys() {
        let json = serde_json::to_value(compute_daily_calorie_targets(1649.0)).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for key in ["sedentary", "light", "moderate", "intense", "veryIntense"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMR is always positive for adult-range inputs
        #[test]
        fn prop_bmr_positive(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            prop_assert!(compute_bmr(weight, height, age, BiologicalSex::Male).unwrap() > 0.0);
            prop_assert!(compute_bmr(weight, height, age, BiologicalSex::Female).unwrap() > 0.0);
        }

        /// Property: Male BMR exceeds female BMR by 166 kcal before rounding
        #[test]
        fn prop_male_bmr_higher(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20u32..60
        ) {
            let male = mifflin_st_jeor_bmr(weight, height, age, BiologicalSex::Male).unwrap();
            let female = mifflin_st_jeor_bmr(weight, height, age, BiologicalSex::Female).unwrap();
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: more activity never means fewer calories
        #[test]
        fn prop_targets_non_decreasing(bmr in 800.0f64..3000.0) {
            let targets = compute_daily_calorie_targets(bmr);
            let values: Vec<f64> = targets.iter().map(|(_, kcal)| kcal).collect();
            prop_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(targets.sedentary >= bmr.round());
        }
    }
}
