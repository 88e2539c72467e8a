//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the estimator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EstimatorError, EstimatorResult};

use super::types::EstimatorConfig;

/// Loads and provides access to the estimator configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind: "127.0.0.1:3000"
/// storage:
///   directory: "./data"
///   slot: hybridWorkLog
/// notifications:
///   dismiss_after_ms: 2000
/// display:
///   currency_symbol: "$"
/// defaults:
///   hourly_rate: "25.00"
///   break_minutes: 30
///   start_time: "09:00"
///   end_time: "17:00"
/// logging:
///   level: info
/// ```
///
/// Every section may be omitted.
///
/// # Example
///
/// ```no_run
/// use earnings_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/estimator.yaml")?;
/// println!("Slot: {}", loader.config().storage.slot);
/// # Ok::<(), earnings_estimator::error::EstimatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EstimatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for the configuration, or names an
    ///   unknown logging level (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EstimatorError::ConfigParseError { message, .. } => EstimatorError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EstimatorResult<Self> {
        // An empty document deserializes as unit, which serde_yaml rejects for structs.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EstimatorConfig =
            serde_yaml::from_str(content).map_err(|e| EstimatorError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        if config.logging.max_level().is_none() {
            return Err(EstimatorError::ConfigParseError {
                path: "<inline>".to_string(),
                message: format!("unknown logging level '{}'", config.logging.level),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EstimatorConfig {
        self.config
    }
}
