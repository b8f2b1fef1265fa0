//! Personnel Cost Engine
//!
//! This crate computes per-employee monthly costs (salary, bonuses, overtime,
//! benefits, social charges) and aggregates them into department rollups,
//! organization-wide key metrics, and period trend tables.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reporting;
