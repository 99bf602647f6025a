//! Studio Metrics WASM Module
//!
//! WebAssembly bindings the calculator pages call. Inputs are the raw
//! strings from the form fields; results come back as JSON strings, and
//! rejected input is thrown as a `JsError` carrying the reason.

use serde::Serialize;
use studio_metrics_shared::{
    compute_bmi, compute_bmr, compute_body_composition, BmiForm, BmrForm, BodyCompositionForm,
    InvalidInput,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Failure of a native-side helper
#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Input(#[from] InvalidInput),

    #[error("Malformed form data: {0}")]
    Json(#[from] serde_json::Error),
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BindingError> {
    Ok(serde_json::to_string(value)?)
}

/// BMI result JSON for the given form fields
pub fn bmi_json(weight: &str, height: &str) -> Result<String, BindingError> {
    let form = BmiForm {
        weight: weight.to_string(),
        height: height.to_string(),
    };
    let (weight_kg, height_cm) = form.parse()?;
    to_json(&compute_bmi(weight_kg, height_cm)?)
}

/// BMR (whole kcal/day) for the given form fields
pub fn bmr_value(weight: &str, height: &str, age: &str, sex: &str) -> Result<f64, BindingError> {
    let form = BmrForm {
        weight: weight.to_string(),
        height: height.to_string(),
        age: age.to_string(),
        sex: sex.to_string(),
    };
    let (weight_kg, height_cm, age_years, sex) = form.parse()?;
    Ok(compute_bmr(weight_kg, height_cm, age_years, sex)?)
}

/// Body composition JSON for a serialized `BodyCompositionForm`
pub fn body_composition_json(form_json: &str) -> Result<String, BindingError> {
    let form: BodyCompositionForm = serde_json::from_str(form_json)?;
    let input = form.parse()?;
    to_json(&compute_body_composition(&input)?)
}

fn js_error(err: BindingError) -> JsError {
    JsError::new(&err.to_string())
}

/// Calculate BMI from the weight (kg) and height (cm) fields
#[wasm_bindgen(js_name = computeBmi)]
pub fn compute_bmi_js(weight: &str, height: &str) -> Result<String, JsError> {
    bmi_json(weight, height).map_err(js_error)
}

/// Calculate BMR (Mifflin-St Jeor)
#[wasm_bindgen(js_name = computeBmr)]
pub fn compute_bmr_js(weight: &str, height: &str, age: &str, sex: &str) -> Result<f64, JsError> {
    bmr_value(weight, height, age, sex).map_err(js_error)
}

/// Calculate body fat, BMR and daily calories from the form state
#[wasm_bindgen(js_name = computeBodyComposition)]
pub fn compute_body_composition_js(form_json: &str) -> Result<String, JsError> {
    body_composition_json(form_json).map_err(js_error)
}
