//! Personnel cost model.
//!
//! This module contains the [`PersonnelCost`] type: one employee's cost
//! breakdown for one period.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// The cost of one employee for one `YYYY-MM` period.
///
/// The total is always derived from the six components and is never stored.
///
/// # Example
///
/// ```
/// use personnel_cost::models::PersonnelCost;
/// use rust_decimal::Decimal;
///
/// let cost = PersonnelCost {
///     bonuses: Decimal::new(500, 0),
///     social_charges: Decimal::new(1250, 0),
///     ..PersonnelCost::new("E001", "2024-11", Decimal::new(5000, 0))
/// };
/// assert_eq!(cost.total_cost(), Decimal::new(6750, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonnelCost {
    /// Identifier of the employee this cost belongs to.
    pub employee_id: String,
    /// Period in `YYYY-MM` form.
    pub period: String,
    /// Base salary for the period.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Bonuses paid in the period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime cost.
    #[serde(default)]
    pub overtime: Decimal,
    /// Additional benefits.
    #[serde(default)]
    pub benefits: Decimal,
    /// Employer social charges.
    #[serde(default)]
    pub social_charges: Decimal,
    /// Any other associated costs.
    #[serde(default)]
    pub other_costs: Decimal,
}

impl PersonnelCost {
    /// Creates a cost record with only the base salary set.
    pub fn new(
        employee_id: impl Into<String>,
        period: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            period: period.into(),
            base_salary,
            ..Self::default()
        }
    }

    /// Sum of all six cost components.
    ///
    /// Partial sums saturate at `Decimal::MAX` / `Decimal::MIN` rather than
    /// overflow.
    pub fn total_cost(&self) -> Decimal {
        [
            self.bonuses,
            self.overtime,
            self.benefits,
            self.social_charges,
            self.other_costs,
        ]
        .into_iter()
        .fold(self.base_salary, Decimal::saturating_add)
    }
}

// Hand-written so the derived total travels with the record.
impl Serialize for PersonnelCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PersonnelCost", 9)?;
        state.serialize_field("employee_id", &self.employee_id)?;
        state.serialize_field("period", &self.period)?;
        state.serialize_field("base_salary", &self.base_salary)?;
        state.serialize_field("bonuses", &self.bonuses)?;
        state.serialize_field("overtime", &self.overtime)?;
        state.serialize_field("benefits", &self.benefits)?;
        state.serialize_field("social_charges", &self.social_charges)?;
        state.serialize_field("other_costs", &self.other_costs)?;
        state.serialize_field("total_cost", &self.total_cost())?;
        state.end()
    }
}
