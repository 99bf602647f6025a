//! Studio Metrics Shared Library
//!
//! Pure health-metric calculators used by the studio site (through the WASM
//! module) and the command-line tool: BMI, US Navy body fat, Mifflin-St Jeor
//! BMR and activity-based calorie targets.

pub mod bands;
pub mod bmi;
pub mod body_fat;
pub mod composition;
pub mod energy;
pub mod errors;
pub mod forms;
pub mod health_metrics;
pub mod rounding;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use body_fat::*;
pub use composition::*;
pub use energy::*;
pub use errors::*;
pub use health_metrics::*;

pub use forms::{BmiForm, BmrForm, BodyCompositionForm};
