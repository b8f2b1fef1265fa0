//! Period trend report.
//!
//! Costs are grouped by their `YYYY-MM` period string and sorted
//! ascending; lexicographic order is chronological for that format.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::PersonnelCost;

use super::table::{Cell, Table, Tabular};

/// Aggregated costs for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendRow {
    /// Period in `YYYY-MM` form.
    pub period: String,
    /// Number of cost records in the period.
    pub record_count: usize,
    /// Sum of `total_cost`.
    pub total_cost: Decimal,
    /// `total_cost / record_count`.
    pub average_cost: Decimal,
    /// Sum of base salaries.
    pub base_salary_total: Decimal,
    /// Sum of bonuses.
    pub bonuses_total: Decimal,
    /// Sum of overtime.
    pub overtime_total: Decimal,
}

impl Tabular for TrendRow {
    const COLUMNS: &'static [&'static str] = &[
        "period",
        "record_count",
        "total_cost",
        "average_cost",
        "base_salary_total",
        "bonuses_total",
        "overtime_total",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.period.clone()),
            Cell::Count(self.record_count),
            Cell::Amount(self.total_cost),
            Cell::Amount(self.average_cost),
            Cell::Amount(self.base_salary_total),
            Cell::Amount(self.bonuses_total),
            Cell::Amount(self.overtime_total),
        ]
    }
}

#[derive(Default)]
struct PeriodTotals {
    record_count: usize,
    total_cost: Decimal,
    base_salary: Decimal,
    bonuses: Decimal,
    overtime: Decimal,
}

/// Groups `costs` by period, sorted ascending by period string.
pub fn trend_report(costs: &[PersonnelCost]) -> Table<TrendRow> {
    let mut periods: HashMap<&str, PeriodTotals> = HashMap::new();

    for cost in costs {
        let totals = periods.entry(cost.period.as_str()).or_default();
        totals.record_count += 1;
        totals.total_cost = totals.total_cost.saturating_add(cost.total_cost());
        totals.base_salary = totals.base_salary.saturating_add(cost.base_salary);
        totals.bonuses = totals.bonuses.saturating_add(cost.bonuses);
        totals.overtime = totals.overtime.saturating_add(cost.overtime);
    }

    let mut rows: Vec<TrendRow> = periods
        .into_iter()
        .map(|(period, totals)| TrendRow {
            period: period.to_string(),
            record_count: totals.record_count,
            total_cost: totals.total_cost,
            average_cost: totals.total_cost / Decimal::from(totals.record_count),
            base_salary_total: totals.base_salary,
            bonuses_total: totals.bonuses,
            overtime_total: totals.overtime,
        })
        .collect();
    rows.sort_by(|a, b| a.period.cmp(&b.period));

    Table::new(rows)
}
