//! Report generator facade.

use tracing::debug;

use crate::models::{Employee, PersonnelCost};

use super::department::{DepartmentRow, report_by_department};
use super::metrics::{KeyMetrics, key_metrics};
use super::table::Table;
use super::trend::{TrendRow, trend_report};

/// Produces reports from employee and cost collections.
///
/// The generator holds no state; every method is a pure function of its
/// arguments.
///
/// # Example
///
/// ```
/// use personnel_cost::models::PersonnelCost;
/// use personnel_cost::reporting::ReportGenerator;
/// use rust_decimal::Decimal;
///
/// let costs = vec![
///     PersonnelCost::new("E001", "2024-11", Decimal::new(5000, 0)),
///     PersonnelCost::new("E001", "2024-10", Decimal::new(5000, 0)),
/// ];
///
/// let trend = ReportGenerator.trend_report(&costs);
/// assert_eq!(trend.rows()[0].period, "2024-10");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    /// Creates a report generator.
    pub fn new() -> Self {
        Self
    }

    /// Department rollup of `costs`, in department encounter order.
    pub fn report_by_department(
        &self,
        employees: &[Employee],
        costs: &[PersonnelCost],
    ) -> Table<DepartmentRow> {
        let table = report_by_department(employees, costs);
        debug!(
            employees = employees.len(),
            costs = costs.len(),
            departments = table.len(),
            "Generated department report"
        );
        table
    }

    /// Organization-wide summary metrics.
    pub fn key_metrics(&self, employees: &[Employee], costs: &[PersonnelCost]) -> KeyMetrics {
        let metrics = key_metrics(employees, costs);
        debug!(
            total_employees = metrics.total_employees,
            total_cost = %metrics.total_cost,
            "Generated key metrics"
        );
        metrics
    }

    /// Per-period totals, sorted by period.
    pub fn trend_report(&self, costs: &[PersonnelCost]) -> Table<TrendRow> {
        let table = trend_report(costs);
        debug!(
            costs = costs.len(),
            periods = table.len(),
            "Generated trend report"
        );
        table
    }
}
