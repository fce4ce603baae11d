//! # BMI Calculator and Formatter
//!
//! `bmi = weight_kg / (height_cm / 100)²`, kept at full `f64` precision.
//! Rounding only happens when the value is rendered for display.

use serde::Serialize;

use crate::core::input::Measurement;

/// A Body Mass Index value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BmiValue(f64);

impl BmiValue {
    /// Wrap any finite value, including ≤ 0. NaN and ±∞ are rejected.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `compute_bmi` is the only source of a non-finite value: the quotient
    /// overflows for absurd magnitudes such as a weight of 1e308 kg.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// Compute the BMI from a validated weight (kg) and height (cm).
pub fn compute_bmi(weight_kg: Measurement, height_cm: Measurement) -> BmiValue {
    let height_m = height_cm.value() / 100.0;
    BmiValue(weight_kg.value() / (height_m * height_m))
}

/// Round to two decimals and render with a comma separator: `22.857…` → `"22,86"`.
///
/// A value exactly halfway between two hundredths rounds away from zero
/// (`22.125` → `"22,13"`).
pub fn format_bmi(bmi: BmiValue) -> String {
    let fixed = match odd_eighths(bmi.value()) {
        Some(eighths) => {
            let cents = (eighths * 25 + eighths.signum()) / 2;
            let sign = if cents < 0 { "-" } else { "" };
            format!("{sign}{}.{:02}", cents.abs() / 100, cents.abs() % 100)
        }
        None => format!("{:.2}", bmi.value()),
    };
    fixed.replacen('.', ",", 1)
}

/// A binary float sits exactly on a hundredths tie only when it is an odd
/// number of eighths (`x.125`, `x.375`, `x.625`, `x.875`). `{:.2}` sends
/// those to the even neighbour.
fn odd_eighths(value: f64) -> Option<i64> {
    // Multiplying by 8 is exact; above 2^53 every f64 is an even integer.
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0
        && eighths.abs() < 9_007_199_254_740_992.0
        && eighths % 2.0 != 0.0;
    is_tie.then_some(eighths as i64)
}
