//! CSV batch processing
//!
//! Reads one set of measurements per row, runs the body-composition
//! calculator on each, and writes the accepted rows back out. Rejected rows
//! are logged with their row number and counted; they never stop the run.

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use studio_metrics_shared::{
    compute_body_composition, AnthropometricInput, BodyCompositionResult, BodyFatCategory,
    InvalidInput,
};
use tracing::{debug, info, warn};

/// One input row as it appears in the file
#[derive(Debug, Deserialize)]
struct BatchRow {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: String,
    neck_cm: f64,
    waist_cm: f64,
    #[serde(default)]
    hip_cm: Option<f64>,
}

impl BatchRow {
    fn into_input(self) -> Result<AnthropometricInput, InvalidInput> {
        Ok(AnthropometricInput {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex.parse()?,
            neck_cm: self.neck_cm,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
        })
    }
}

/// Flat CSV output record
#[derive(Debug, Serialize)]
struct BatchOutputRow {
    row: usize,
    body_fat_percent: f64,
    category: BodyFatCategory,
    bmr: f64,
    lean_mass_kg: f64,
    fat_mass_kg: f64,
    sedentary_kcal: f64,
    light_kcal: f64,
    moderate_kcal: f64,
    intense_kcal: f64,
    very_intense_kcal: f64,
}

impl BatchOutputRow {
    fn new(row: usize, result: &BodyCompositionResult) -> Self {
        let calories = &result.daily_calories;
        Self {
            row,
            body_fat_percent: result.body_fat_percent,
            category: result.category,
            bmr: result.bmr,
            lean_mass_kg: result.lean_mass_kg,
            fat_mass_kg: result.fat_mass_kg,
            sedentary_kcal: calories.sedentary,
            light_kcal: calories.light,
            moderate_kcal: calories.moderate,
            intense_kcal: calories.intense,
            very_intense_kcal: calories.very_intense,
        }
    }
}

/// Accepted row in JSON output
#[derive(Debug, Serialize)]
struct BatchJsonRow<'a> {
    row: usize,
    result: &'a BodyCompositionResult,
}

/// Rejected row
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub reason: String,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub accepted: Vec<(usize, BodyCompositionResult)>,
    pub rejected: Vec<RejectedRow>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

/// Run the calculator over every row of `reader`
pub fn process<R: Read>(reader: R) -> CliResult<BatchSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut summary = BatchSummary::default();

    for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = index + 1;
        let outcome = match record {
            Ok(parsed) => parsed
                .into_input()
                .and_then(|input| compute_body_composition(&input))
                .map_err(|err| err.to_string()),
            Err(err) if err.is_io_error() => return Err(CliError::Csv(err)),
            Err(err) => Err(format!("unreadable row: {}", err)),
        };

        match outcome {
            Ok(result) => {
                debug!(row, body_fat = result.body_fat_percent, "Row accepted");
                summary.accepted.push((row, result));
            }
            Err(reason) => {
                warn!(row, %reason, "Row rejected");
                summary.rejected.push(RejectedRow { row, reason });
            }
        }
    }

    info!(
        accepted = summary.accepted.len(),
        rejected = summary.rejected.len(),
        "Batch complete"
    );
    Ok(summary)
}

/// Write accepted rows in the requested format
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &BatchSummary,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            let mut writer = csv::Writer::from_writer(out);
            for (row, result) in &summary.accepted {
                writer.serialize(BatchOutputRow::new(*row, result))?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let rows: Vec<BatchJsonRow<'_>> = summary
                .accepted
                .iter()
                .map(|(row, result)| BatchJsonRow { row: *row, result })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
