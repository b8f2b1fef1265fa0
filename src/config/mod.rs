//! Configuration loading and management for the Personnel Cost Engine.
//!
//! This module loads the engine configuration (social charges rate and
//! export settings) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use personnel_cost::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Rate: {}", loader.config().social_charges_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_SOCIAL_CHARGES_RATE, EngineConfig, ExportConfig};
