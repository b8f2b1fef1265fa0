//! Core data models for the Personnel Cost Engine.
//!
//! This module contains the employee and per-period cost records used
//! throughout the engine.

mod employee;
mod personnel_cost;

pub use employee::Employee;
pub use personnel_cost::PersonnelCost;
