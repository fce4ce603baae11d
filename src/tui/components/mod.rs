//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: application title and subtitle
//! - `ResultPanel`: message, formatted BMI, band label, advice, image reference
//! - `AlertPopup`: modal shown when the inputs are rejected
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `MeasurementField`: one labelled numeric input row; emits `FieldEvent`
//!
//! Components receive external data as props (struct fields), not by reading
//! the `App` directly, so every one of them renders on a `TestBackend` in
//! isolation.
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs
//! ├── measurement_field.rs
//! ├── result_panel.rs
//! └── alert_popup.rs
//! ```

mod alert_popup;
mod measurement_field;
mod result_panel;
mod title_bar;

pub use alert_popup::AlertPopup;
pub use measurement_field::{FieldEvent, MeasurementField};
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
