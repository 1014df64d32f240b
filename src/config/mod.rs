//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};

use crate::core::constants::output_formats;
use crate::core::error::{Result, UrliveError};

use std::fs;
use std::path::Path;

/// Configuration file probed in the working directory and its parents.
const CONFIG_FILE_NAME: &str = ".urlive.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Surface raw transport errors for unreachable URLs
    pub verbose: Option<bool>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Path to a file listing URL prefixes to skip
    pub ignore_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            ignore_file: None,
        }
    }
}

/// CLI arguments relevant to configuration, merged over file-based config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub verbose: bool,
    pub output_format: Option<String>,
    pub ignore_file: Option<String>,
    pub config_file: Option<String>,
    pub no_config: bool,
}

impl Config {
    /// Load configuration from file, validating its contents
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrliveError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrliveError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(CONFIG_FILE_NAME) {
            return config;
        }

        // Check parent directories, up to 3 levels
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref ignore_file) = cli_config.ignore_file {
            self.ignore_file = Some(ignore_file.clone());
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Whether per-probe lines are suppressed in favor of a final JSON dump
    pub fn wants_structured_output(&self) -> bool {
        self.output_format() == output_formats::JSON
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrliveError::Config(format!(
                "Invalid output format '{}'. Expected one of: {}",
                format,
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}
