//! Rounding helpers for reported values
//!
//! All calculators compute at full precision and round only the values they
//! report. Rounding is half away from zero (`f64::round`).

/// Round `value` to `decimals` places
///
/// Values too large to scale are returned unchanged; at that magnitude they
/// carry no fractional digits anyway.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round to the nearest whole number (kcal values)
pub fn round_whole(value: f64) -> f64 {
    value.round()
}
