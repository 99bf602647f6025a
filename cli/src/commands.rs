//! Command dispatch

use crate::args::{
    BatchArgs, BmiArgs, BmrArgs, BodyFatArgs, CaloriesArgs, Commands, CompositionArgs,
};
use crate::batch;
use crate::config::{AppConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{write_report, BmrReport, BodyFatReport};
use std::fs::File;
use std::io::{BufReader, Write};
use studio_metrics_shared::{
    classify_body_fat, compute_bmi, compute_bmr, compute_body_composition,
    compute_body_fat_percent, compute_daily_calorie_targets, AnthropometricInput,
};
use tracing::{debug, info};

/// Run `command`, writing results to `out`
pub fn run<W: Write>(
    command: Commands,
    format: OutputFormat,
    config: &AppConfig,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Commands::Bmi(args) => bmi(args, format, out),
        Commands::Bmr(args) => bmr(args, format, out),
        Commands::BodyFat(args) => body_fat(args, format, out),
        Commands::Calories(args) => calories(args, format, out),
        Commands::Composition(args) => composition(args, format, out),
        Commands::Batch(args) => run_batch(args, format, out),
        Commands::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

fn bmi<W: Write>(args: BmiArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let result = compute_bmi(args.weight, args.height)?;
    debug!(value = result.value, classification = ?result.classification, "BMI computed");
    write_report(out, &result, format)
}

fn bmr<W: Write>(args: BmrArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let bmr = compute_bmr(args.weight, args.height, args.age, args.sex)?;
    debug!(bmr, sex = %args.sex, "BMR computed");
    write_report(out, &BmrReport { bmr, sex: args.sex }, format)
}

fn body_fat<W: Write>(args: BodyFatArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let body_fat_percent =
        compute_body_fat_percent(args.height, args.neck, args.waist, args.sex, args.hip)?;
    let report = BodyFatReport {
        body_fat_percent,
        category: classify_body_fat(body_fat_percent, args.sex),
        sex: args.sex,
    };
    debug!(body_fat_percent, category = ?report.category, "Body fat computed");
    write_report(out, &report, format)
}

fn calories<W: Write>(args: CaloriesArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let targets = compute_daily_calorie_targets(args.bmr);
    write_report(out, &targets, format)
}

fn composition<W: Write>(
    args: CompositionArgs,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    let input = AnthropometricInput {
        weight_kg: args.weight,
        height_cm: args.height,
        age_years: args.age,
        sex: args.sex,
        neck_cm: args.neck,
        waist_cm: args.waist,
        hip_cm: args.hip,
    };
    let result = compute_body_composition(&input)?;
    debug!(
        body_fat_percent = result.body_fat_percent,
        bmr = result.bmr,
        "Body composition computed"
    );
    write_report(out, &result, format)
}

fn run_batch<W: Write>(args: BatchArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    info!(input = %args.input.display(), "Processing batch");
    let file = File::open(&args.input)?;
    let summary = batch::process(BufReader::new(file))?;
    batch::write_summary(out, &summary, format)?;

    if summary.rejected.is_empty() {
        Ok(())
    } else {
        for rejected in &summary.rejected {
            eprintln!("row {}: {}", rejected.row, rejected.reason);
        }
        Err(CliError::BatchRowsRejected {
            failed: summary.rejected.len(),
            total: summary.total(),
        })
    }
}
