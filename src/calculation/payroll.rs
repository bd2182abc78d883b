//! Roster-wide payroll reporting.
//!
//! Runs the salary calculation for every eligible employee of a roster and
//! aggregates the results. Employees are independent of each other, so the
//! per-employee calculations run in parallel with `rayon`.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::CalculationSettings;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Employee, PayMonth, PayrollReport, PayrollTotals, SkippedEmployee,
};

use super::salary::calculate_salary_for_month;

/// Calculates salaries for a whole roster for one month.
///
/// Employees without a positive salary are listed in
/// [`PayrollReport::skipped`] instead of failing the run. Attendance records
/// are matched to employees by id; records for unknown ids are ignored.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] when the period is
/// out of range or an amount overflows.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_payroll;
/// use salary_engine::config::{AbsencePolicy, CalculationSettings, OvertimeMultipliers};
/// use salary_engine::models::{Employee, Ineligibility};
/// use rust_decimal::Decimal;
///
/// let settings = CalculationSettings::new(
///     Decimal::new(8, 0),
///     22,
///     OvertimeMultipliers {
///         weekday: Decimal::new(15, 1),
///         weekend: Decimal::new(2, 0),
///         holiday: Decimal::new(2, 0),
///     },
///     AbsencePolicy::FixedMonthly,
/// )
/// .unwrap();
/// let roster = vec![
///     Employee {
///         id: "emp_001".to_string(),
///         name: "Ayse".to_string(),
///         surname: "Yilmaz".to_string(),
///         monthly_salary: Some(Decimal::new(30000, 0)),
///     },
///     Employee {
///         id: "emp_002".to_string(),
///         name: "Mehmet".to_string(),
///         surname: "Demir".to_string(),
///         monthly_salary: None,
///     },
/// ];
///
/// let report = calculate_payroll(&roster, &[], 2024, 3, &settings).unwrap();
/// assert_eq!(report.results.len(), 1);
/// assert_eq!(report.skipped[0].reason, Ineligibility::MissingSalary);
/// assert_eq!(report.totals.total_payable, Decimal::new(30000, 0));
/// ```
pub fn calculate_payroll(
    roster: &[Employee],
    records: &[AttendanceRecord],
    year: i32,
    month: u32,
    settings: &CalculationSettings,
) -> EngineResult<PayrollReport> {
    let pay_month = PayMonth::new(year, month)?;

    let mut eligible = Vec::with_capacity(roster.len());
    let mut skipped = Vec::new();
    for employee in roster {
        match employee.eligible_salary() {
            Ok(_) => eligible.push(employee),
            Err(reason) => {
                warn!(
                    employee_id = %employee.id,
                    reason = ?reason,
                    "Skipping employee without a usable salary"
                );
                skipped.push(SkippedEmployee {
                    employee_id: employee.id.clone(),
                    reason,
                });
            }
        }
    }

    let by_employee = group_by_employee(records);
    let results = eligible
        .par_iter()
        .map(|employee| {
            let own = by_employee
                .get(employee.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            calculate_salary_for_month(employee, own, pay_month, settings)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let totals = PayrollTotals::from_results(&results)?;
    info!(
        year = pay_month.year(),
        month = pay_month.month(),
        employees = totals.employees,
        skipped = skipped.len(),
        total_payable = %totals.total_payable,
        "Payroll calculated"
    );

    Ok(PayrollReport {
        year: pay_month.year(),
        month: pay_month.month(),
        results,
        skipped,
        totals,
    })
}

/// Groups records by employee id, keeping their original order.
fn group_by_employee(records: &[AttendanceRecord]) -> HashMap<&str, Vec<AttendanceRecord>> {
    let mut groups: HashMap<&str, Vec<AttendanceRecord>> = HashMap::new();
    for record in records {
        groups
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record.clone());
    }
    groups
}
