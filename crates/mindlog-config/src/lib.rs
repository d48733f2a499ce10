//! Configuration parsing and validation for mindlog
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Question and rating sets per entry kind (built-ins for anything omitted)
//! - Journal settings (theme, mood trend window, export app name)
//! - Validation with clear error messages

mod defaults;
mod journal;
mod schema;
mod validation;

pub use defaults::*;
pub use journal::*;
pub use schema::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<JournalConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load configuration, falling back to the built-in one when the file does not exist
pub fn load_config_or_default(path: impl AsRef<Path>) -> ConfigResult<JournalConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "No config file, using built-in prompts");
        return Ok(JournalConfig::default());
    }

    let config = load_config(path)?;
    debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<JournalConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(JournalConfig::from_raw(raw))
}
