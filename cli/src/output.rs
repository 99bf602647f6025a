//! Result rendering
//!
//! Every calculator result renders either as a short human-readable report
//! or as pretty-printed JSON.

use crate::config::OutputFormat;
use crate::error::CliResult;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use studio_metrics_shared::{
    BiologicalSex, BmiResult, BodyCompositionResult, BodyFatCategory, DailyCalorieTargets,
};

/// A result that can be shown to a person
pub trait Report: Serialize {
    fn to_text(&self) -> String;
}

/// Write `report` in the requested format, followed by a newline
pub fn write_report<R: Report, W: Write>(
    out: &mut W,
    report: &R,
    format: OutputFormat,
) -> CliResult<()> {
    let rendered = match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

/// BMR on its own
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmrReport {
    pub bmr: f64,
    pub sex: BiologicalSex,
}

/// Body fat percentage with its category
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatReport {
    pub body_fat_percent: f64,
    pub category: BodyFatCategory,
    pub sex: BiologicalSex,
}

fn calorie_lines(out: &mut String, targets: &DailyCalorieTargets) {
    for (level, kcal) in targets.iter() {
        let _ = writeln!(
            out,
            "  {:<18} {:>6.0} kcal  ({})",
            level.label(),
            kcal,
            level.description()
        );
    }
}

impl Report for BmiResult {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "BMI: {:.2} ({})", self.value, self.classification.label());
        let _ = writeln!(out, "{}", self.classification.advice());
        let _ = writeln!(
            out,
            "Ideal weight: {:.1} - {:.1} kg",
            self.ideal_weight_range_kg.min_kg, self.ideal_weight_range_kg.max_kg
        );
        out
    }
}

impl Report for BmrReport {
    fn to_text(&self) -> String {
        format!("BMR: {:.0} kcal/day ({})", self.bmr, self.sex)
    }
}

impl Report for BodyFatReport {
    fn to_text(&self) -> String {
        format!(
            "Body fat: {:.1}% ({})",
            self.body_fat_percent,
            self.category.label()
        )
    }
}

impl Report for DailyCalorieTargets {
    fn to_text(&self) -> String {
        let mut out = String::from("Daily calories by activity level:\n");
        calorie_lines(&mut out, self);
        out
    }
}

impl Report for BodyCompositionResult {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Body fat: {:.1}% ({})",
            self.body_fat_percent,
            self.category.label()
        );
        let _ = writeln!(out, "BMR: {:.0} kcal/day", self.bmr);
        let _ = writeln!(out, "Lean mass: {:.1} kg", self.lean_mass_kg);
        let _ = writeln!(out, "Fat mass: {:.1} kg", self.fat_mass_kg);
        out.push_str("Daily calories by activity level:\n");
        calorie_lines(&mut out, &self.daily_calories);
        out
    }
}
