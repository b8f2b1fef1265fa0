//! Monthly cost calculation.
//!
//! This module provides the [`CostCalculator`], which turns an employee and
//! the optional per-period amounts into a [`PersonnelCost`] record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DEFAULT_SOCIAL_CHARGES_RATE, EngineConfig};
use crate::models::{Employee, PersonnelCost};

/// Optional per-period amounts supplied by the caller.
///
/// All amounts default to zero. Negative values are accepted as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostExtras {
    /// Bonuses paid in the period.
    pub bonuses: Decimal,
    /// Overtime cost.
    pub overtime: Decimal,
    /// Additional benefits.
    pub benefits: Decimal,
    /// Any other associated costs.
    pub other_costs: Decimal,
}

/// Calculates personnel costs using a fixed social charges rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostCalculator {
    social_charges_rate: Decimal,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_SOCIAL_CHARGES_RATE)
    }
}

impl CostCalculator {
    /// Creates a calculator with the given social charges rate (0.25 = 25%).
    pub fn new(social_charges_rate: Decimal) -> Self {
        Self {
            social_charges_rate,
        }
    }

    /// Creates a calculator using the rate from the engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.social_charges_rate)
    }

    /// The configured social charges rate.
    pub fn social_charges_rate(&self) -> Decimal {
        self.social_charges_rate
    }

    /// Computes one employee's cost for one period.
    ///
    /// Social charges are always derived as `base_salary * social_charges_rate`;
    /// the remaining components come from `extras`.
    ///
    /// # Examples
    ///
    /// ```
    /// use personnel_cost::calculation::{CostCalculator, CostExtras};
    /// use personnel_cost::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "E001",
    ///     "Ada Lovelace",
    ///     "Engineering",
    ///     "Developer",
    ///     Decimal::new(5000, 0),
    ///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let calculator = CostCalculator::default();
    /// let cost = calculator.compute_monthly_cost(&employee, "2024-11", CostExtras::default());
    /// assert_eq!(cost.social_charges, Decimal::new(1250, 0));
    /// assert_eq!(cost.total_cost(), Decimal::new(6250, 0));
    /// ```
    pub fn compute_monthly_cost(
        &self,
        employee: &Employee,
        period: &str,
        extras: CostExtras,
    ) -> PersonnelCost {
        let social_charges = employee
            .base_salary()
            .saturating_mul(self.social_charges_rate);

        let cost = PersonnelCost {
            employee_id: employee.id().to_string(),
            period: period.to_string(),
            base_salary: employee.base_salary(),
            bonuses: extras.bonuses,
            overtime: extras.overtime,
            benefits: extras.benefits,
            social_charges,
            other_costs: extras.other_costs,
        };

        debug!(
            employee_id = %cost.employee_id,
            period = %cost.period,
            social_charges = %social_charges,
            total_cost = %cost.total_cost(),
            "Computed monthly cost"
        );

        cost
    }

    /// Computes the base monthly cost of every active employee in `department`.
    ///
    /// Results follow the input order. No extras are applied.
    pub fn compute_department_costs(
        &self,
        employees: &[Employee],
        department: &str,
        period: &str,
    ) -> Vec<PersonnelCost> {
        employees
            .iter()
            .filter(|employee| employee.department() == department && employee.is_active())
            .map(|employee| self.compute_monthly_cost(employee, period, CostExtras::default()))
            .collect()
    }

    /// Mean `total_cost` over `costs`, or zero for an empty slice.
    pub fn average_cost_per_employee(&self, costs: &[PersonnelCost]) -> Decimal {
        if costs.is_empty() {
            return Decimal::ZERO;
        }

        let total = costs
            .iter()
            .map(PersonnelCost::total_cost)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        total / Decimal::from(costs.len())
    }
}
