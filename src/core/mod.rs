//! # Core Application Logic
//!
//! The BMI engine and the form state around it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │                             │
//!                    │  • input    (normalize)     │
//!                    │  • bmi      (compute/format)│
//!                    │  • category (classify)      │
//!                    │  • engine   (evaluate)      │
//!                    │  • state + action (reducer) │
//!                    │                             │
//!                    │  No terminal I/O. Pure.     │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!              ┌────────────┐              ┌────────────┐
//!              │    TUI     │              │    CLI     │
//!              │  Adapter   │              │  one-shot  │
//!              │ (ratatui)  │              │  (cli.rs)  │
//!              └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input`]: raw field text → `Measurement`
//! - [`bmi`]: `Measurement` pair → `BmiValue`, and display formatting
//! - [`category`]: the five bands and `classify()`
//! - [`engine`]: `evaluate()`, the whole pipeline
//! - [`state`]: the `App` struct, the form's view state
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: `~/.imc/config.toml` loading and resolution

pub mod action;
pub mod bmi;
pub mod category;
pub mod config;
pub mod engine;
pub mod input;
pub mod state;

pub use engine::{ClassificationResult, EvaluationError, Field, evaluate};
pub use input::ParseMode;
