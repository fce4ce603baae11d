//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.imc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolution run before the logger exists (the log level and
//! file are themselves settings), so they record what they would log into
//! `Diagnostics`, which the caller replays once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::input::ParseMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImcConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub parse_mode: Option<ParseMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "imc.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub parse_mode: ParseMode,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Diagnostics
// ============================================================================

/// Log records held back until the logger is installed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostics {
    records: Vec<(Level, String)>,
}

impl Diagnostics {
    pub fn info(&mut self, message: impl Into<String>) {
        self.records.push((Level::Info, message.into()));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.records.push((Level::Warn, message.into()));
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.records.push((Level::Debug, message.into()));
    }

    /// Messages recorded at `warn`.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Emit every held record through the `log` facade, oldest first.
    pub fn replay(&self) {
        for (level, message) in &self.records {
            log::log!(*level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.imc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".imc").join("config.toml"))
}

/// Load config from `~/.imc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ImcConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(diagnostics: &mut Diagnostics) -> Result<ImcConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            diagnostics.warn("Could not determine home directory, using default config");
            return Ok(ImcConfig::default());
        }
    };

    if !path.exists() {
        diagnostics.info(format!(
            "No config file found, generating default at {}",
            path.display()
        ));
        generate_default_config(&path, diagnostics);
        return Ok(ImcConfig::default());
    }

    let config = load_config_from(&path)?;
    diagnostics.info(format!("Loaded config from {}", path.display()));
    diagnostics.debug(format!("Config: {:?}", config));
    Ok(config)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ImcConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# IMC Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [input]
# parse_mode = "prefix"   # "prefix" reads "70abc" as 70, "strict" rejects it

# [logging]
# level = "debug"         # off, error, warn, info, debug, trace
# file = "imc.log"        # relative to the working directory
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, diagnostics: &mut Diagnostics) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        diagnostics.warn(format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        diagnostics.warn(format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Raw environment overrides, read once so resolution stays testable.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub parse_mode: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            parse_mode: std::env::var("IMC_PARSE_MODE").ok(),
            log_level: std::env::var("IMC_LOG_LEVEL").ok(),
            log_file: std::env::var("IMC_LOG_FILE").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_parse_mode` comes from the `--parse-mode` flag (None = not specified).
/// Unrecognized values are skipped and noted in `diagnostics`.
pub fn resolve(
    config: &ImcConfig,
    env: &EnvOverrides,
    cli_parse_mode: Option<ParseMode>,
    diagnostics: &mut Diagnostics,
) -> ResolvedConfig {
    // Parse mode: CLI → env → config → default
    let parse_mode = cli_parse_mode
        .or_else(|| {
            env.parse_mode
                .as_deref()
                .and_then(|s| parse_mode_from_str(s, diagnostics))
        })
        .or(config.input.parse_mode)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env
        .log_level
        .as_deref()
        .or(config.logging.level.as_deref())
        .and_then(|s| match LevelFilter::from_str(s) {
            Ok(level) => Some(level),
            Err(_) => {
                diagnostics.warn(format!("Unknown log level '{s}', using {DEFAULT_LOG_LEVEL}"));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        parse_mode,
        log_level,
        log_file: PathBuf::from(log_file),
    }
}

fn parse_mode_from_str(s: &str, diagnostics: &mut Diagnostics) -> Option<ParseMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "prefix" => Some(ParseMode::Prefix),
        "strict" => Some(ParseMode::Strict),
        other => {
            diagnostics.warn(format!("Unknown parse mode '{other}', ignoring"));
            None
        }
    }
}
