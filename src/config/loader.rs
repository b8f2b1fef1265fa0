//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CostError, CostResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// social_charges_rate: "0.25"
/// export:
///   delimiter: ","
///   include_bom: true
///   sheet_name: "Report"
/// ```
///
/// # Example
///
/// ```no_run
/// use personnel_cost::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("Social charges rate: {}", loader.config().social_charges_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::ConfigNotFound`] if the file cannot be read and
    /// [`CostError::ConfigParseError`] if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> CostResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CostError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| CostError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(
            path = %path_str,
            social_charges_rate = %config.social_charges_rate,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Loads configuration from `path` if given, otherwise uses defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> CostResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<EngineConfig, String> {
        // An empty file deserializes as YAML null; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
