//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::input::ParseMode;
use crate::core::state::App;

/// Creates an empty test App with the default parse mode.
pub fn test_app() -> App {
    App::new(ParseMode::Prefix)
}

/// Creates a test App with both fields already typed in.
pub fn filled_app(weight: &str, height: &str) -> App {
    let mut app = test_app();
    app.weight_input = weight.to_string();
    app.height_input = height.to_string();
    app
}

/// Flattens a rendered test buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
