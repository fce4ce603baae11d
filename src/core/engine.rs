//! # BMI Engine
//!
//! Runs the whole pipeline on the two raw field texts:
//!
//! ```text
//! weight text ─┐
//!              ├─ normalize ─► compute_bmi ─► classify ─► format_bmi ─► ClassificationResult
//! height text ─┘
//! ```
//!
//! Deterministic and side-effect free apart from debug logging.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::core::bmi::{BmiValue, compute_bmi, format_bmi};
use crate::core::category::{Category, classify};
use crate::core::input::{InvalidInput, Measurement, ParseMode, normalize};

/// Which form field a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Height => "height",
        }
    }
}

/// A computed BMI, its display string, and the band it falls in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub bmi: BmiValue,
    pub formatted: String,
    pub category: &'static Category,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    InvalidInput { field: Field, cause: InvalidInput },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::InvalidInput { field, cause } => {
                write!(f, "invalid {}: {}", field.label(), cause)
            }
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluationError::InvalidInput { cause, .. } => Some(cause),
        }
    }
}

fn measure(raw: &str, field: Field, mode: ParseMode) -> Result<Measurement, EvaluationError> {
    normalize(raw, mode).map_err(|cause| EvaluationError::InvalidInput { field, cause })
}

/// The operand that pushed `weight / height_m²` past `f64::MAX`: whichever
/// sits more orders of magnitude from 1 in the direction that grows the
/// quotient.
fn overflow_source(weight: Measurement, height: Measurement) -> Field {
    let height_m = height.value() / 100.0;
    let from_weight = weight.value().log10();
    let from_height = -(height_m * height_m).log10();
    if from_weight >= from_height {
        Field::Weight
    } else {
        Field::Height
    }
}

/// Evaluate weight (kg) and height (cm) texts. The weight is checked first,
/// so when both are bad the weight is reported.
pub fn evaluate(
    weight_raw: &str,
    height_raw: &str,
    mode: ParseMode,
) -> Result<ClassificationResult, EvaluationError> {
    let weight = measure(weight_raw, Field::Weight, mode)?;
    let height = measure(height_raw, Field::Height, mode)?;

    let bmi = compute_bmi(weight, height);
    if !bmi.is_finite() {
        return Err(EvaluationError::InvalidInput {
            field: overflow_source(weight, height),
            cause: InvalidInput::NotFinite,
        });
    }

    let category = classify(bmi);
    let formatted = format_bmi(bmi);
    debug!(
        "BMI {} from weight={} height={} → {}",
        formatted,
        weight.value(),
        height.value(),
        category.id
    );

    Ok(ClassificationResult {
        bmi,
        formatted,
        category,
    })
}
