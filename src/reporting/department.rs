//! Department rollup report.
//!
//! Costs are joined to employees by id and grouped by the employee's
//! department. Departments appear in the order they are first seen.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{Employee, PersonnelCost};

use super::table::{Cell, Table, Tabular};

/// One department's aggregated costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRow {
    /// Department name.
    pub department: String,
    /// Number of distinct employees with at least one cost record.
    pub employee_count: usize,
    /// Sum of `total_cost`.
    pub total_cost: Decimal,
    /// `total_cost / employee_count`.
    pub average_cost_per_employee: Decimal,
    /// Sum of base salaries.
    pub base_salary_total: Decimal,
    /// Sum of bonuses.
    pub bonuses_total: Decimal,
    /// Sum of overtime.
    pub overtime_total: Decimal,
    /// Sum of benefits.
    pub benefits_total: Decimal,
    /// Sum of social charges.
    pub social_charges_total: Decimal,
}

impl Tabular for DepartmentRow {
    const COLUMNS: &'static [&'static str] = &[
        "department",
        "employee_count",
        "total_cost",
        "average_cost_per_employee",
        "base_salary_total",
        "bonuses_total",
        "overtime_total",
        "benefits_total",
        "social_charges_total",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.department.clone()),
            Cell::Count(self.employee_count),
            Cell::Amount(self.total_cost),
            Cell::Amount(self.average_cost_per_employee),
            Cell::Amount(self.base_salary_total),
            Cell::Amount(self.bonuses_total),
            Cell::Amount(self.overtime_total),
            Cell::Amount(self.benefits_total),
            Cell::Amount(self.social_charges_total),
        ]
    }
}

#[derive(Default)]
struct DepartmentTotals<'a> {
    employee_ids: HashSet<&'a str>,
    total_cost: Decimal,
    base_salary: Decimal,
    bonuses: Decimal,
    overtime: Decimal,
    benefits: Decimal,
    social_charges: Decimal,
}

impl<'a> DepartmentTotals<'a> {
    fn add(&mut self, cost: &'a PersonnelCost) {
        self.employee_ids.insert(cost.employee_id.as_str());
        self.total_cost = self.total_cost.saturating_add(cost.total_cost());
        self.base_salary = self.base_salary.saturating_add(cost.base_salary);
        self.bonuses = self.bonuses.saturating_add(cost.bonuses);
        self.overtime = self.overtime.saturating_add(cost.overtime);
        self.benefits = self.benefits.saturating_add(cost.benefits);
        self.social_charges = self.social_charges.saturating_add(cost.social_charges);
    }

    fn into_row(self, department: &str) -> DepartmentRow {
        let employee_count = self.employee_ids.len();
        let average_cost_per_employee = if employee_count > 0 {
            self.total_cost / Decimal::from(employee_count)
        } else {
            Decimal::ZERO
        };

        DepartmentRow {
            department: department.to_string(),
            employee_count,
            total_cost: self.total_cost,
            average_cost_per_employee,
            base_salary_total: self.base_salary,
            bonuses_total: self.bonuses,
            overtime_total: self.overtime,
            benefits_total: self.benefits,
            social_charges_total: self.social_charges,
        }
    }
}

/// Groups `costs` by the department of their employee.
///
/// Costs whose `employee_id` matches no employee are left out.
pub fn report_by_department(
    employees: &[Employee],
    costs: &[PersonnelCost],
) -> Table<DepartmentRow> {
    let by_id: HashMap<&str, &Employee> = employees
        .iter()
        .map(|employee| (employee.id(), employee))
        .collect();

    let mut groups: Vec<(&str, DepartmentTotals<'_>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut unmatched = 0usize;

    for cost in costs {
        let Some(employee) = by_id.get(cost.employee_id.as_str()) else {
            unmatched += 1;
            continue;
        };
        let department = employee.department();
        let position = *positions.entry(department).or_insert_with(|| {
            groups.push((department, DepartmentTotals::default()));
            groups.len() - 1
        });
        groups[position].1.add(cost);
    }

    if unmatched > 0 {
        debug!(
            unmatched,
            "Dropped cost records with no matching employee from department report"
        );
    }

    Table::new(
        groups
            .into_iter()
            .map(|(department, totals)| totals.into_row(department))
            .collect(),
    )
}
