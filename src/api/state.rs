//! Application state for the Personnel Cost Engine API.
//!
//! This module defines the shared, read-only state that is available to all
//! request handlers.

use std::sync::Arc;

use crate::calculation::CostCalculator;
use crate::config::EngineConfig;

/// Shared application state.
///
/// Holds the engine configuration loaded at startup. Nothing in it changes
/// after construction, so requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builds a calculator using the configured social charges rate.
    pub fn calculator(&self) -> CostCalculator {
        CostCalculator::from_config(&self.config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
