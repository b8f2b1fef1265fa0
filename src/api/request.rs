//! Request types for the Personnel Cost Engine API.
//!
//! Employees embedded in requests are validated while the body is parsed,
//! so a negative salary is rejected before any handler runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::CostExtras;
use crate::models::{Employee, PersonnelCost};

/// Request body for `/costs/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCostRequest {
    /// The employee to cost.
    pub employee: Employee,
    /// Period in `YYYY-MM` form.
    pub period: String,
    /// Bonuses paid in the period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime cost.
    #[serde(default)]
    pub overtime: Decimal,
    /// Additional benefits.
    #[serde(default)]
    pub benefits: Decimal,
    /// Any other associated costs.
    #[serde(default)]
    pub other_costs: Decimal,
}

impl MonthlyCostRequest {
    /// The optional amounts of this request.
    pub fn extras(&self) -> CostExtras {
        CostExtras {
            bonuses: self.bonuses,
            overtime: self.overtime,
            benefits: self.benefits,
            other_costs: self.other_costs,
        }
    }
}

/// Request body for `/costs/department`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCostsRequest {
    /// Candidate employees.
    pub employees: Vec<Employee>,
    /// Department to select (exact match).
    pub department: String,
    /// Period in `YYYY-MM` form.
    pub period: String,
}

/// Employees and cost records to report on.
///
/// Used as the body of `/reports/department`, `/reports/metrics` and
/// `/reports/trend`, and as the dataset file read by the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Employees referenced by the cost records.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Cost records to aggregate.
    #[serde(default)]
    pub costs: Vec<PersonnelCost>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_monthly_request_defaults_extras_to_zero() {
        let json = r#"{
            "employee": {
                "id": "E001",
                "name": "Ada Lovelace",
                "department": "Tech",
                "title": "Developer",
                "base_salary": "5000",
                "hire_date": "2020-01-15"
            },
            "period": "2024-11",
            "bonuses": "250.50"
        }"#;

        let request: MonthlyCostRequest = serde_json::from_str(json).unwrap();
        let extras = request.extras();

        assert_eq!(extras.bonuses, Decimal::from_str("250.50").unwrap());
        assert_eq!(extras.overtime, Decimal::ZERO);
        assert_eq!(extras.benefits, Decimal::ZERO);
        assert_eq!(extras.other_costs, Decimal::ZERO);
    }

    #[test]
    fn test_report_request_fields_are_optional() {
        let request: ReportRequest = serde_json::from_str("{}").unwrap();
        assert!(request.employees.is_empty());
        assert!(request.costs.is_empty());
    }
}
