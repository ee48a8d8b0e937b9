//! Configuration loading from TOML files
//!
//! The engine ships a built-in rule table; this module loads alternative
//! tables for threshold tuning without a rebuild.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scoring::RuleSet;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a rule table from a TOML file and validate it
pub fn load_ruleset(path: &Path) -> Result<RuleSet, ConfigError> {
    let rules: RuleSet = load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse a rule table from TOML text and validate it
pub fn parse_ruleset(content: &str) -> Result<RuleSet, ConfigError> {
    let rules: RuleSet = parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}
