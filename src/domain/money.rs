// src/domain/money.rs

//! Rounding and guarded-division helpers shared by every calculator.
//!
//! Scenario math runs on unrounded `f64` values; rounding happens once, when a
//! figure is written into an output struct.

use serde::Serializer;

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Whole currency units.
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// `numerator / denominator`, or 0 when the denominator is zero or the result
/// is not finite.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let r = numerator / denominator;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// Guarded percentage, rounded to one decimal.
pub fn percent(numerator: f64, denominator: f64) -> f64 {
    round_to(ratio(numerator, denominator) * 100.0, 1)
}

pub(crate) fn serialize_whole<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(whole(*value))
}

pub(crate) fn serialize_cents<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(round_to(*value, 2))
}
