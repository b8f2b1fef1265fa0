//! Organization-wide key metrics.
//!
//! Averages here are per cost record, not per distinct employee.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Employee, PersonnelCost};

use super::table::{Cell, Tabular};

/// Summary metrics over a set of cost records.
///
/// Percentages are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetrics {
    /// Number of active employees, whether or not they have cost records.
    pub total_employees: usize,
    /// Sum of `total_cost` across all records.
    pub total_cost: Decimal,
    /// `total_cost` divided by the number of records.
    pub average_cost_per_employee: Decimal,
    /// Mean base salary per record.
    pub average_base_salary: Decimal,
    /// Mean social charges per record.
    pub average_social_charges: Decimal,
    /// Bonuses as a percentage of `total_cost`.
    pub bonus_percentage: Decimal,
    /// Overtime as a percentage of `total_cost`.
    pub overtime_percentage: Decimal,
}

impl KeyMetrics {
    fn zero(total_employees: usize) -> Self {
        Self {
            total_employees,
            total_cost: Decimal::ZERO,
            average_cost_per_employee: Decimal::ZERO,
            average_base_salary: Decimal::ZERO,
            average_social_charges: Decimal::ZERO,
            bonus_percentage: Decimal::ZERO,
            overtime_percentage: Decimal::ZERO,
        }
    }
}

impl Tabular for KeyMetrics {
    const COLUMNS: &'static [&'static str] = &[
        "total_employees",
        "total_cost",
        "average_cost_per_employee",
        "average_base_salary",
        "average_social_charges",
        "bonus_percentage",
        "overtime_percentage",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Count(self.total_employees),
            Cell::Amount(self.total_cost),
            Cell::Amount(self.average_cost_per_employee),
            Cell::Amount(self.average_base_salary),
            Cell::Amount(self.average_social_charges),
            Cell::Amount(self.bonus_percentage),
            Cell::Amount(self.overtime_percentage),
        ]
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
///
/// A ratio too large for `Decimal` saturates toward the sign of `part`.
fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Computes summary metrics for `costs`.
pub fn key_metrics(employees: &[Employee], costs: &[PersonnelCost]) -> KeyMetrics {
    let total_employees = employees.iter().filter(|e| e.is_active()).count();

    if costs.is_empty() {
        return KeyMetrics::zero(total_employees);
    }

    let mut total_cost = Decimal::ZERO;
    let mut total_base_salary = Decimal::ZERO;
    let mut total_bonuses = Decimal::ZERO;
    let mut total_overtime = Decimal::ZERO;
    let mut total_social_charges = Decimal::ZERO;

    for cost in costs {
        total_cost = total_cost.saturating_add(cost.total_cost());
        total_base_salary = total_base_salary.saturating_add(cost.base_salary);
        total_bonuses = total_bonuses.saturating_add(cost.bonuses);
        total_overtime = total_overtime.saturating_add(cost.overtime);
        total_social_charges = total_social_charges.saturating_add(cost.social_charges);
    }

    let records = Decimal::from(costs.len());

    KeyMetrics {
        total_employees,
        total_cost,
        average_cost_per_employee: total_cost / records,
        average_base_salary: total_base_salary / records,
        average_social_charges: total_social_charges / records,
        bonus_percentage: percentage_of(total_bonuses, total_cost),
        overtime_percentage: percentage_of(total_overtime, total_cost),
    }
}
