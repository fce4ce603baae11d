//! # Application State
//!
//! The form's view state as one plain value. No TUI-specific types here;
//! focus and cursor state live in the `tui` module.
//!
//! ```text
//! App
//! ├── weight_input: String                  // raw text of the Poids field
//! ├── height_input: String                  // raw text of the Taille field
//! ├── result: Option<ClassificationResult>  // last successful calculation
//! ├── message: String                       // line above the result
//! ├── alert: Option<Alert>                  // pending modal, if any
//! └── parse_mode: ParseMode                 // how field text is read
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::engine::{ClassificationResult, Field};
use crate::core::input::ParseMode;

pub const RESULT_MESSAGE: &str = "Votre IMC est:";
pub const INVALID_INPUT_TITLE: &str = "Valeurs manquantes";
pub const INVALID_INPUT_BODY: &str = "Veuillez entrer un poids et une taille valides.";

/// A modal message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn invalid_input() -> Self {
        Self {
            title: INVALID_INPUT_TITLE.to_string(),
            body: INVALID_INPUT_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub weight_input: String,
    pub height_input: String,
    pub result: Option<ClassificationResult>,
    pub message: String,
    pub alert: Option<Alert>,
    pub parse_mode: ParseMode,
}

impl App {
    pub fn new(parse_mode: ParseMode) -> Self {
        Self {
            weight_input: String::new(),
            height_input: String::new(),
            result: None,
            message: RESULT_MESSAGE.to_string(),
            alert: None,
            parse_mode,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.parse_mode)
    }

    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Weight => &self.weight_input,
            Field::Height => &self.height_input,
        }
    }
}
