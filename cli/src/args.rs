//! CLI argument definitions using clap derive

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use studio_metrics_shared::validation::parse_sex;
use studio_metrics_shared::BiologicalSex;

#[derive(Parser, Debug)]
#[command(name = "studio-metrics")]
#[command(author, version, about = "Health-metric calculators for the studio")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format (default from configuration)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Body Mass Index with classification and ideal weight range
    Bmi(BmiArgs),

    /// Basal Metabolic Rate (Mifflin-St Jeor)
    Bmr(BmrArgs),

    /// Body fat percentage (US Navy method)
    BodyFat(BodyFatArgs),

    /// Daily calorie needs for each activity level
    Calories(CaloriesArgs),

    /// Body fat, BMR, lean/fat mass and daily calories in one report
    Composition(CompositionArgs),

    /// Body composition for every row of a CSV file
    Batch(BatchArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct BmiArgs {
    /// Weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,
}

#[derive(Args, Debug, Clone)]
pub struct BmrArgs {
    /// Weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Age in whole years
    #[arg(long)]
    pub age: u32,

    /// Biological sex (male or female)
    #[arg(long, value_parser = parse_sex)]
    pub sex: BiologicalSex,
}

#[derive(Args, Debug, Clone)]
pub struct BodyFatArgs {
    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Neck circumference in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub neck: f64,

    /// Waist circumference in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub waist: f64,

    /// Biological sex (male or female)
    #[arg(long, value_parser = parse_sex)]
    pub sex: BiologicalSex,

    /// Hip circumference in centimeters (required for female)
    #[arg(long, allow_negative_numbers = true)]
    pub hip: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct CaloriesArgs {
    /// Basal Metabolic Rate in kcal/day
    #[arg(long, allow_negative_numbers = true)]
    pub bmr: f64,
}

#[derive(Args, Debug, Clone)]
pub struct CompositionArgs {
    /// Weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Age in whole years
    #[arg(long)]
    pub age: u32,

    /// Biological sex (male or female)
    #[arg(long, value_parser = parse_sex)]
    pub sex: BiologicalSex,

    /// Neck circumference in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub neck: f64,

    /// Waist circumference in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub waist: f64,

    /// Hip circumference in centimeters (required for female)
    #[arg(long, allow_negative_numbers = true)]
    pub hip: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV with columns weight_kg,height_cm,age_years,sex,neck_cm,waist_cm,hip_cm
    pub input: PathBuf,
}
