//! Reporting for the Personnel Cost Engine.
//!
//! This module aggregates cost records into department rollups,
//! organization-wide key metrics, and period trend tables. All reports are
//! pure functions of their inputs.

mod department;
mod generator;
mod metrics;
mod table;
mod trend;

pub use department::{DepartmentRow, report_by_department};
pub use generator::ReportGenerator;
pub use metrics::{KeyMetrics, key_metrics};
pub use table::{Cell, Table, Tabular};
pub use trend::{TrendRow, trend_report};
