//! Configuration management for makegen
//!
//! Runtime settings are loaded from environment variables with defaults.
//! Command-line flags override them (see [`crate::cli`]).
//!
//! # Environment Variables
//!
//! - `MAKEGEN_LOG_LEVEL`: Logging level - default: "info"
//! - `MAKEGEN_OUTPUT_FILE`: Path of the generated Makefile - default: "Makefile"
//! - `MAKEGEN_DEFAULT_PROJECT_NAME`: Project name used when none can be
//!   derived - default: "myproject"
//! - `MAKEGEN_ASSUME_YES`: Accept detected defaults without prompting
//!   (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use makegen::MakegenConfig;
//!
//! let config = MakegenConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::makefile::DEFAULT_PROJECT_NAME;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_OUTPUT_FILE: &str = "Makefile";
const DEFAULT_ASSUME_YES: bool = false;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },

    /// Configuration file could not be read
    #[error("Failed to read {path}: {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Configuration file extension is not yaml, yml, json or toml
    #[error("Unsupported configuration format: {0}. Use .yaml, .yml, .json or .toml")]
    UnsupportedFormat(PathBuf),
}

/// Runtime settings for makegen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakegenConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Where the generated Makefile is written, relative to the project root
    pub output_file: PathBuf,

    /// Fallback project name
    pub default_project_name: String,

    /// Skip the questionnaire and use detected defaults
    pub assume_yes: bool,
}

impl Default for MakegenConfig {
    /// Loads from `MAKEGEN_*` environment variables, falling back to defaults
    /// for anything unset or unparsable.
    fn default() -> Self {
        let log_level = env::var("MAKEGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let output_file = env::var("MAKEGEN_OUTPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let default_project_name = env::var("MAKEGEN_DEFAULT_PROJECT_NAME")
            .unwrap_or_else(|_| DEFAULT_PROJECT_NAME.to_string());

        let assume_yes = env::var("MAKEGEN_ASSUME_YES")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_ASSUME_YES);

        Self {
            log_level,
            output_file,
            default_project_name,
            assume_yes,
        }
    }
}

impl MakegenConfig {
    /// Validates the configuration
    ///
    /// Checks that the log level is known and that the output file and default
    /// project name are not empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output file name cannot be empty".to_string(),
            ));
        }

        if self.default_project_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Default project name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
