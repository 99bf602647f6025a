//! Body fat estimation (US Navy circumference method)
//!
//! Men: BF% = 495 / (1.0324 - 0.19077 × log10(waist - neck) + 0.15456 × log10(height)) - 450
//! Women: BF% = 495 / (1.29579 - 0.35004 × log10(waist + hip - neck) + 0.221 × log10(height)) - 450

use crate::bands::BandTable;
use crate::errors::{InvalidInput, MetricsResult};
use crate::health_metrics::BiologicalSex;
use crate::rounding::round_to;
use crate::validation::{require_hip, validate_measurement};
use serde::{Deserialize, Serialize};

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Acceptable,
    Obese,
}

const MALE_BODY_FAT_BANDS: BandTable<BodyFatCategory> = BandTable::new(
    &[
        (6.0, BodyFatCategory::Essential),
        (14.0, BodyFatCategory::Athletic),
        (18.0, BodyFatCategory::Fitness),
        (25.0, BodyFatCategory::Acceptable),
    ],
    BodyFatCategory::Obese,
);

const FEMALE_BODY_FAT_BANDS: BandTable<BodyFatCategory> = BandTable::new(
    &[
        (14.0, BodyFatCategory::Essential),
        (21.0, BodyFatCategory::Athletic),
        (25.0, BodyFatCategory::Fitness),
        (32.0, BodyFatCategory::Acceptable),
    ],
    BodyFatCategory::Obese,
);

fn bands_for(sex: BiologicalSex) -> &'static BandTable<BodyFatCategory> {
    match sex {
        BiologicalSex::Male => &MALE_BODY_FAT_BANDS,
        BiologicalSex::Female => &FEMALE_BODY_FAT_BANDS,
    }
}

impl BodyFatCategory {
    /// Get the `[lower, upper)` body fat range for this category by sex
    pub fn range(&self, sex: BiologicalSex) -> (f64, f64) {
        bands_for(sex)
            .range(*self)
            .map(|(lower, upper)| (lower.max(0.0), upper.min(100.0)))
            .unwrap_or((0.0, 100.0))
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Acceptable => "Acceptable",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    bands_for(sex).classify(body_fat_percent)
}

/// US Navy estimate at full precision
///
/// Validates height, neck and waist, plus hip for females, in that order.
/// `hip_cm` is ignored for males even when present.
pub fn us_navy_body_fat(
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    sex: BiologicalSex,
    hip_cm: Option<f64>,
) -> MetricsResult<f64> {
    let height_cm = validate_measurement("height_cm", height_cm)?;
    let neck_cm = validate_measurement("neck_cm", neck_cm)?;
    let waist_cm = validate_measurement("waist_cm", waist_cm)?;

    let body_fat = match sex {
        BiologicalSex::Male => {
            let girth = waist_cm - neck_cm;
            if girth <= 0.0 {
                return Err(InvalidInput::inconsistent("waist_cm"));
            }
            495.0 / (1.0324 - 0.19077 * girth.log10() + 0.15456 * height_cm.log10()) - 450.0
        }
        BiologicalSex::Female => {
            let hip_cm = require_hip(hip_cm)?;
            let girth = waist_cm + hip_cm - neck_cm;
            if girth <= 0.0 {
                return Err(InvalidInput::inconsistent("neck_cm"));
            }
            495.0 / (1.29579 - 0.35004 * girth.log10() + 0.221 * height_cm.log10()) - 450.0
        }
    };

    // Denominator reached zero
    if !body_fat.is_finite() {
        return Err(InvalidInput::inconsistent("waist_cm"));
    }

    Ok(body_fat)
}

/// Body fat percentage rounded to one decimal
pub fn compute_body_fat_percent(
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    sex: BiologicalSex,
    hip_cm: Option<f64>,
) -> MetricsResult<f64> {
    us_navy_body_fat(height_cm, neck_cm, waist_cm, sex, hip_cm).map(|bf| round_to(bf, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_male_reference_measurements() {
        // 175cm, neck 38, waist 85
        let bf = compute_body_fat_percent(175.0, 38.0, 85.0, BiologicalSex::Male, None).unwrap();
        assert!(bf > 0.0 && bf < 60.0);
        assert_eq!(bf, 16.9);
        assert_eq!(classify_body_fat(bf, BiologicalSex::Male), BodyFatCategory::Fitness);
    }

    #[test]
    fn test_female_reference_measurements() {
        // 165cm, neck 33, waist 72, hip 98
        let bf = compute_body_fat_percent(165.0, 33.0, 72.0, BiologicalSex::Female, Some(98.0))
            .unwrap();
        assert_eq!(bf, 26.9);
        assert_eq!(classify_body_fat(bf, BiologicalSex::Female), BodyFatCategory::Acceptable);
    }

    #[test]
    fn test_result_has_one_decimal() {
        let bf = compute_body_fat_percent(175.0, 38.0, 85.0, BiologicalSex::Male, None).unwrap();
        assert_eq!(bf, round_to(bf, 1));
    }

    #[rstest]
    #[case(85.0, 85.0)]
    #[case(80.0, 85.0)]
    fn test_male_waist_must_exceed_neck(#[case] waist: f64, #[case] neck: f64) {
        let err = compute_body_fat_percent(175.0, neck, waist, BiologicalSex::Male, None)
            .unwrap_err();
        assert_eq!(err.reason, "measurements inconsistent");
    }

    #[test]
    fn test_female_requires_hip() {
        let err = compute_body_fat_percent(165.0, 33.0, 72.0, BiologicalSex::Female, None)
            .unwrap_err();
        assert_eq!(err.field, "hip_cm");
    }

    #[test]
    fn test_female_log_domain() {
        let err = compute_body_fat_percent(165.0, 200.0, 50.0, BiologicalSex::Female, Some(60.0))
            .unwrap_err();
        assert_eq!(err.reason, "measurements inconsistent");
    }

    #[test]
    fn test_estimate_outside_human_range_is_still_reported() {
        // tall with a narrow waist: log argument 15, estimate below zero
        let bf = compute_body_fat_percent(200.0, 45.0, 60.0, BiologicalSex::Male, None).unwrap();
        assert!(bf < 0.0);
        assert_eq!(bf, round_to(bf, 1));
    }

    #[test]
    fn test_male_ignores_hip() {
        let without = compute_body_fat_percent(175.0, 38.0, 85.0, BiologicalSex::Male, None);
        let with = compute_body_fat_percent(175.0, 38.0, 85.0, BiologicalSex::Male, Some(-5.0));
        assert_eq!(without, with);
    }

    #[test]
    fn test_rejects_non_positive_measurements() {
        assert_eq!(
            compute_body_fat_percent(0.0, 38.0, 85.0, BiologicalSex::Male, None)
                .unwrap_err()
                .field,
            "height_cm"
        );
        assert_eq!(
            compute_body_fat_percent(175.0, 0.0, 85.0, BiologicalSex::Male, None)
                .unwrap_err()
                .field,
            "neck_cm"
        );
        assert_eq!(
            compute_body_fat_percent(175.0, 38.0, -1.0, BiologicalSex::Male, None)
                .unwrap_err()
                .field,
            "waist_cm"
        );
    }

    #[rstest]
    #[case(5.9, BiologicalSex::Male, BodyFatCategory::Essential)]
    #[case(6.0, BiologicalSex::Male, BodyFatCategory::Athletic)]
    #[case(14.0, BiologicalSex::Male, BodyFatCategory::Fitness)]
    #[case(18.0, BiologicalSex::Male, BodyFatCategory::Acceptable)]
    #[case(24.9, BiologicalSex::Male, BodyFatCategory::Acceptable)]
    #[case(25.0, BiologicalSex::Male, BodyFatCategory::Obese)]
    #[case(13.9, BiologicalSex::Female, BodyFatCategory::Essential)]
    #[case(14.0, BiologicalSex::Female, BodyFatCategory::Athletic)]
    #[case(21.0, BiologicalSex::Female, BodyFatCategory::Fitness)]
    #[case(25.0, BiologicalSex::Female, BodyFatCategory::Acceptable)]
    #[case(32.0, BiologicalSex::Female, BodyFatCategory::Obese)]
    fn test_body_fat_bands(
        #[case] percent: f64,
        #[case] sex: BiologicalSex,
        #[case] expected: BodyFatCategory,
    ) {
        assert_eq!(classify_body_fat(percent, sex), expected);
    }

    #[test]
    fn test_category_ranges_by_sex() {
        assert_eq!(BodyFatCategory::Athletic.range(BiologicalSex::Male), (6.0, 14.0));
        assert_eq!(BodyFatCategory::Athletic.range(BiologicalSex::Female), (14.0, 21.0));
        assert_eq!(BodyFatCategory::Essential.range(BiologicalSex::Male), (0.0, 6.0));
        assert_eq!(BodyFatCategory::Obese.range(BiologicalSex::Female), (32.0, 100.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: larger waist = higher body fat (same neck and height)
        #[test]
        fn prop_body_fat_increases_with_waist(
            height in 160.0f64..195.0,
            neck in 34.0f64..42.0,
            waist1 in 75.0f64..90.0,
            extra in 1.0f64..20.0
        ) {
            let bf1 = us_navy_body_fat(height, neck, waist1, BiologicalSex::Male, None).unwrap();
            let bf2 = us_navy_body_fat(height, neck, waist1 + extra, BiologicalSex::Male, None).unwrap();
            prop_assert!(bf2 > bf1);
        }

        /// Property: any estimate that succeeds is a finite number
        #[test]
        fn prop_body_fat_is_finite(
            height in 50.0f64..250.0,
            neck in 10.0f64..80.0,
            waist in 10.0f64..200.0,
            hip in 10.0f64..200.0,
            female in any::<bool>()
        ) {
            let sex = if female { BiologicalSex::Female } else { BiologicalSex::Male };
            if let Ok(bf) = us_navy_body_fat(height, neck, waist, sex, Some(hip)) {
                prop_assert!(bf.is_finite());
            }
        }
    }
}
