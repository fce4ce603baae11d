//! # One-shot mode
//!
//! `imc --weight W --height H` evaluates once and exits instead of opening
//! the form. Output is built here as plain strings so `main` only writes
//! them out and sets the exit status.

use log::warn;

use crate::core::state::RESULT_MESSAGE;
use crate::core::{ClassificationResult, ParseMode, evaluate};

/// Everything a one-shot run writes, plus its exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Evaluate one weight/height pair and render the result as text or
/// pretty JSON. Rejected input yields an `Error: ...` line on stderr and
/// exit status 1.
pub fn run_once(
    weight: &str,
    height: &str,
    mode: ParseMode,
    json: bool,
) -> serde_json::Result<Outcome> {
    match evaluate(weight, height, mode) {
        Ok(result) => {
            let stdout = if json {
                format!("{}\n", serde_json::to_string_pretty(&result)?)
            } else {
                render_text(&result)
            };
            Ok(Outcome {
                stdout,
                stderr: String::new(),
                exit_code: 0,
            })
        }
        Err(e) => {
            warn!("One-shot calculation rejected: {}", e);
            Ok(Outcome {
                stdout: String::new(),
                stderr: format!("Error: {e}\n"),
                exit_code: 1,
            })
        }
    }
}

/// Message and BMI, then the band label, then its advice.
pub fn render_text(result: &ClassificationResult) -> String {
    format!(
        "{} {}\n{}\n{}\n",
        RESULT_MESSAGE, result.formatted, result.category.label, result.category.advice
    )
}
