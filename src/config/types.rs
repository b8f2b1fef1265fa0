//! Configuration types for the cost engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default fraction of base salary charged as social contributions.
pub const DEFAULT_SOCIAL_CHARGES_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Top-level engine configuration.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fraction of base salary charged as social contributions (0.25 = 25%).
    pub social_charges_rate: Decimal,
    /// Settings for report export.
    pub export: ExportConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            social_charges_rate: DEFAULT_SOCIAL_CHARGES_RATE,
            export: ExportConfig::default(),
        }
    }
}

/// Report export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Field delimiter for delimited-text export.
    pub delimiter: char,
    /// Whether to prefix delimited-text output with a UTF-8 byte order mark.
    pub include_bom: bool,
    /// Worksheet name for spreadsheet export.
    pub sheet_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_bom: true,
            sheet_name: "Report".to_string(),
        }
    }
}
