//! Configuration loading and validation.
//!
//! All configuration problems are fatal and reported before any user
//! interaction begins; a session never starts with a half-valid setup.

use crate::collector::CollectorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("entropy length must be a multiple of 32 bits in [160, 256], got {0}")]
    EntropyBits(usize),
    #[error("target must be a positive finite bit count, got {0}")]
    TargetBits(f64),
    #[error("word list must contain exactly 2048 words, found {0}")]
    WordCount(usize),
    #[error("word list has a blank line at line {0}")]
    BlankLine(usize),
    #[error("failed to read file: {0}")]
    FileRead(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Collection session settings.
    #[serde(default)]
    pub collector: CollectorConfig,
    /// Word list file; the embedded English list is used when absent.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
}

impl FileConfig {
    /// Loads configuration from a TOML file, validating eagerly.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.collector.validate()?;
        Ok(config)
    }
}
