//! Salary calculation result models.
//!
//! This module contains the [`SalaryCalculationResult`] type produced for a
//! single employee, and the [`PayrollReport`] aggregating a whole roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Ineligibility;
use crate::error::{EngineError, EngineResult};

/// Number of in-month attendance records per status.
///
/// # Example
///
/// ```
/// use salary_engine::models::AttendanceCounts;
///
/// let counts = AttendanceCounts::default();
/// assert_eq!(counts.total(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Days recorded as present for the full day.
    pub full_days: u32,
    /// Days recorded as present for half a day.
    pub half_days: u32,
    /// Days on approved leave.
    pub leave_days: u32,
    /// Days covered by a medical report.
    pub report_days: u32,
    /// Days absent without leave or report.
    pub absent_days: u32,
}

impl AttendanceCounts {
    /// Total number of counted days across every status.
    pub fn total(&self) -> u32 {
        self.full_days + self.half_days + self.leave_days + self.report_days + self.absent_days
    }
}

/// Overtime hours and pay by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeDetails {
    /// Regular hours worked beyond the daily threshold on present days.
    pub weekday_hours: Decimal,
    /// Overtime hours worked on weekends.
    pub weekend_hours: Decimal,
    /// Overtime hours worked on public holidays.
    pub holiday_hours: Decimal,
    /// Pay for weekday overtime hours.
    pub weekday_pay: Decimal,
    /// Pay for weekend overtime hours.
    pub weekend_pay: Decimal,
    /// Pay for holiday overtime hours.
    pub holiday_pay: Decimal,
    /// Sum of the three category pays.
    pub total_overtime_pay: Decimal,
}

impl OvertimeDetails {
    /// Details with no overtime at all.
    pub fn zero() -> Self {
        Self {
            weekday_hours: Decimal::ZERO,
            weekend_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            weekday_pay: Decimal::ZERO,
            weekend_pay: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            total_overtime_pay: Decimal::ZERO,
        }
    }
}

/// The salary breakdown for one employee and one month.
///
/// Always satisfies `total_payable == calculated_salary + overtime_details.total_overtime_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculationResult {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's given name.
    pub employee_name: String,
    /// The employee's surname.
    pub employee_surname: String,
    /// The calculated year.
    pub year: i32,
    /// The calculated month.
    pub month: u32,
    /// The monthly salary as recorded on the roster.
    pub base_salary: Decimal,
    /// In-month attendance counts per status.
    pub attendance_counts: AttendanceCounts,
    /// Overtime hours and pay.
    pub overtime_details: OvertimeDetails,
    /// Salary after the absence policy has been applied.
    pub calculated_salary: Decimal,
    /// Calculated salary plus overtime pay.
    pub total_payable: Decimal,
}

/// An employee left out of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEmployee {
    /// The employee's identifier.
    pub employee_id: String,
    /// Why the employee was left out.
    pub reason: Ineligibility,
}

/// Roster-wide sums over a payroll report's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of employees with a result.
    pub employees: usize,
    /// Sum of base salaries.
    pub base_salary: Decimal,
    /// Sum of calculated salaries.
    pub calculated_salary: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of total payable amounts.
    pub total_payable: Decimal,
}

impl PayrollTotals {
    /// Sums the given results.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] on `monthly_salary` when a sum
    /// does not fit in a [`Decimal`].
    pub fn from_results(results: &[SalaryCalculationResult]) -> EngineResult<Self> {
        let sum = |quantity: &str, amount: fn(&SalaryCalculationResult) -> Decimal| {
            results
                .iter()
                .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(amount(r)))
                .ok_or_else(|| EngineError::amount_overflow(quantity))
        };

        Ok(Self {
            employees: results.len(),
            base_salary: sum("payroll base salary", |r| r.base_salary)?,
            calculated_salary: sum("payroll calculated salary", |r| r.calculated_salary)?,
            overtime_pay: sum("payroll overtime pay", |r| {
                r.overtime_details.total_overtime_pay
            })?,
            total_payable: sum("payroll total payable", |r| r.total_payable)?,
        })
    }
}

/// Salary results for a whole roster and one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The calculated year.
    pub year: i32,
    /// The calculated month.
    pub month: u32,
    /// Results for eligible employees, in roster order.
    pub results: Vec<SalaryCalculationResult>,
    /// Employees left out, in roster order.
    pub skipped: Vec<SkippedEmployee>,
    /// Sums over `results`.
    pub totals: PayrollTotals,
}
