//! Employee compensation model.
//!
//! This module defines the [`Employee`] struct carrying the compensation
//! terms the salary calculator needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why an employee cannot be included in a salary calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ineligibility {
    /// No monthly salary is recorded.
    MissingSalary,
    /// The recorded monthly salary is zero or negative.
    NonPositiveSalary,
    /// The recorded monthly salary has a fraction of a cent.
    SubCentSalary,
}

/// Represents an employee on the roster with their compensation terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's given name.
    pub name: String,
    /// The employee's surname.
    pub surname: String,
    /// The gross monthly salary, if one has been recorded.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

impl Employee {
    /// Returns the salary when it is usable for calculation: present,
    /// positive and a whole number of cents.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{Employee, Ineligibility};
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ayse".to_string(),
    ///     surname: "Yilmaz".to_string(),
    ///     monthly_salary: Some(Decimal::new(30000, 0)),
    /// };
    /// assert_eq!(employee.eligible_salary(), Ok(Decimal::new(30000, 0)));
    ///
    /// employee.monthly_salary = None;
    /// assert_eq!(employee.eligible_salary(), Err(Ineligibility::MissingSalary));
    /// ```
    pub fn eligible_salary(&self) -> Result<Decimal, Ineligibility> {
        match self.monthly_salary {
            None => Err(Ineligibility::MissingSalary),
            Some(salary) if salary <= Decimal::ZERO => Err(Ineligibility::NonPositiveSalary),
            Some(salary) if salary.normalize().scale() > 2 => Err(Ineligibility::SubCentSalary),
            Some(salary) => Ok(salary),
        }
    }
}
