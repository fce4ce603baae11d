//! IMC library exports for the binary and for testing

pub mod cli;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
