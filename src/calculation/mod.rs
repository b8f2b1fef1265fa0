//! Calculation logic for the Personnel Cost Engine.
//!
//! This module turns employees and per-period amounts into cost records,
//! applying the configured social charges rate.

mod cost_calculator;

pub use cost_calculator::{CostCalculator, CostExtras};
