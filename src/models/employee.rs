//! Employee model.
//!
//! This module defines the [`Employee`] record. Its only enforced invariant
//! is a non-negative base salary, checked on every construction path,
//! including deserialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CostError, CostResult};

/// Represents an employee whose costs are calculated and reported.
///
/// Fields are read-only once constructed. Use [`Employee::new`] to build one;
/// deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    id: String,
    name: String,
    department: String,
    title: String,
    base_salary: Decimal,
    hire_date: NaiveDate,
    active: bool,
}

/// Unvalidated wire shape of an [`Employee`].
#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    id: String,
    name: String,
    department: String,
    title: String,
    base_salary: Decimal,
    hire_date: NaiveDate,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = CostError;

    fn try_from(record: EmployeeRecord) -> CostResult<Self> {
        Employee::new(
            record.id,
            record.name,
            record.department,
            record.title,
            record.base_salary,
            record.hire_date,
        )
        .map(|employee| employee.with_active(record.active))
    }
}

impl Employee {
    /// Creates an active employee.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::InvalidEmployee`] if `base_salary` is negative.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert!(employee.is_active());
    ///
    /// let invalid = Employee::new(
    ///     "E002",
    ///     "Negative Pay",
    ///     "Engineering",
    ///     "Developer",
    ///     Decimal::new(-1000, 0),
    ///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    /// );
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        title: impl Into<String>,
        base_salary: Decimal,
        hire_date: NaiveDate,
    ) -> CostResult<Self> {
        if base_salary < Decimal::ZERO {
            return Err(CostError::InvalidEmployee {
                field: "base_salary".to_string(),
                message: format!("must not be negative (got {})", base_salary),
            });
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            title: title.into(),
            base_salary,
            hire_date,
            active: true,
        })
    }

    /// Returns the same employee with the given active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Unique, caller-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Job title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Monthly base salary. Never negative.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Whether the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(base_salary: &str) -> CostResult<Employee> {
        Employee::new(
            "E001",
            "Ada Lovelace",
            "Engineering",
            "Developer",
            dec(base_salary),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_create_valid_employee() {
        let employee = create_test_employee("5000").unwrap();

        assert_eq!(employee.id(), "E001");
        assert_eq!(employee.name(), "Ada Lovelace");
        assert_eq!(employee.department(), "Engineering");
        assert_eq!(employee.title(), "Developer");
        assert_eq!(employee.base_salary(), dec("5000"));
        assert_eq!(
            employee.hire_date(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(employee.is_active());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = create_test_employee("-1000").unwrap_err();
        match err {
            CostError::InvalidEmployee { field, .. } => assert_eq!(field, "base_salary"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        assert!(create_test_employee("0").is_ok());
        assert!(create_test_employee("-0").is_ok());
    }

    #[test]
    fn test_with_active_marks_inactive() {
        let employee = create_test_employee("3000").unwrap().with_active(false);
        assert!(!employee.is_active());
    }

    #[test]
    fn test_deserialize_defaults_to_active() {
        let json = r#"{
            "id": "E002",
            "name": "Grace Hopper",
            "department": "Sales",
            "title": "Account Executive",
            "base_salary": "4000.50",
            "hire_date": "2021-09-20"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id(), "E002");
        assert_eq!(employee.base_salary(), dec("4000.50"));
        assert!(employee.is_active());
    }

    #[test]
    fn test_deserialize_accepts_numeric_salary() {
        let json = r#"{
            "id": "E003",
            "name": "Alan Turing",
            "department": "Research",
            "title": "Scientist",
            "base_salary": 6000,
            "hire_date": "2019-06-10",
            "active": false
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.base_salary(), dec("6000"));
        assert!(!employee.is_active());
    }

    #[test]
    fn test_deserialize_rejects_negative_salary() {
        let json = r#"{
            "id": "E004",
            "name": "Bad Data",
            "department": "Sales",
            "title": "Clerk",
            "base_salary": "-1",
            "hire_date": "2022-01-01"
        }"#;

        let err = serde_json::from_str::<Employee>(json).unwrap_err();
        assert!(err.to_string().contains("base_salary"));
    }

    #[test]
    fn test_serialize_uses_iso_hire_date() {
        let employee = create_test_employee("5000").unwrap();
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["id"], "E001");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["base_salary"], "5000");
        assert_eq!(value["hire_date"], "2020-01-01");
        assert_eq!(value["active"], true);
    }
}
