//! # Input Normalizer
//!
//! Turns the raw text of a form field into a validated `Measurement`.
//!
//! ```text
//! "70,5"  →  replace first ',' with '.'  →  "70.5"  →  parse  →  70.5 kg
//! ```
//!
//! Two parse strategies exist. `Prefix` reads the longest leading number and
//! ignores whatever follows (`"70abc"` is 70). `Strict` requires the whole
//! trimmed text to be a number. Neither accepts NaN, infinities, zero or
//! negative values.

use std::fmt;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading decimal number, optionally signed, with an optional exponent.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern is valid")
});

/// How much of the field text has to be numeric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Leading numeric prefix, trailing characters ignored
    #[default]
    Prefix,
    /// Whole (trimmed) text must be a number
    Strict,
}

impl ParseMode {
    pub fn label(&self) -> &'static str {
        match self {
            ParseMode::Prefix => "prefix",
            ParseMode::Strict => "strict",
        }
    }
}

/// A validated, finite, strictly positive quantity (kg or cm).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Measurement(f64);

impl Measurement {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Why a field could not be turned into a `Measurement`.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Empty, or no numeric content where one was required
    NotANumber,
    /// Parsed to an infinity, or the value overflows downstream
    NotFinite,
    /// Zero or negative
    NotPositive(f64),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotANumber => write!(f, "not a number"),
            InvalidInput::NotFinite => write!(f, "value is not finite"),
            InvalidInput::NotPositive(v) => write!(f, "value must be positive (got {v})"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Validate raw field text into a `Measurement`.
pub fn normalize(raw: &str, mode: ParseMode) -> Result<Measurement, InvalidInput> {
    let text = raw.replacen(',', ".", 1);
    let value = parse_number(&text, mode).ok_or(InvalidInput::NotANumber)?;

    if !value.is_finite() {
        return Err(InvalidInput::NotFinite);
    }
    if value <= 0.0 {
        return Err(InvalidInput::NotPositive(value));
    }
    Ok(Measurement(value))
}

fn parse_number(text: &str, mode: ParseMode) -> Option<f64> {
    match mode {
        ParseMode::Prefix => {
            let trimmed = text.trim_start();
            let found = NUMERIC_PREFIX.find(trimmed)?;
            found.as_str().parse().ok()
        }
        ParseMode::Strict => {
            let trimmed = text.trim();
            // `f64::from_str` also takes "inf"/"NaN"; only plain decimals count here
            match NUMERIC_PREFIX.find(trimmed) {
                Some(m) if m.end() == trimmed.len() => trimmed.parse().ok(),
                _ => None,
            }
        }
    }
}
