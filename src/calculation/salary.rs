//! Monthly salary calculation for a single employee.

use tracing::debug;

use crate::config::CalculationSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, Ineligibility, PayMonth, SalaryCalculationResult};

use super::absence::apply_absence_policy;
use super::attendance_counts::count_attendance;
use super::hourly_rate::base_hourly_rate;
use super::month_filter::{ensure_records_belong_to, records_in_month};
use super::overtime_pay::{calculate_overtime_pay, collect_overtime_minutes};
use super::rounding::round_currency;

/// Calculates one employee's salary breakdown for a calendar month.
///
/// The calculation is pure: the same inputs always give the same result.
///
/// # Arguments
///
/// * `employee` - The employee; must carry a positive monthly salary
/// * `records` - That employee's attendance records (may be empty)
/// * `year` - Four-digit calendar year
/// * `month` - Calendar month, 1 through 12
/// * `settings` - Standard day and month, overtime multipliers, absence policy
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the salary is missing, not
/// positive or finer than a cent, the period is out of range, any record
/// belongs to another employee, or an amount overflows. Records dated
/// outside the month are dropped, not rejected.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::config::{AbsencePolicy, CalculationSettings, OvertimeMultipliers};
/// use salary_engine::models::Employee;
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
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ayse".to_string(),
///     surname: "Yilmaz".to_string(),
///     monthly_salary: Some(Decimal::new(30000, 0)),
/// };
///
/// let result = calculate_salary(&employee, &[], 2024, 3, &settings).unwrap();
/// assert_eq!(result.attendance_counts.total(), 0);
/// assert_eq!(result.total_payable, Decimal::new(30000, 0));
/// ```
pub fn calculate_salary(
    employee: &Employee,
    records: &[AttendanceRecord],
    year: i32,
    month: u32,
    settings: &CalculationSettings,
) -> EngineResult<SalaryCalculationResult> {
    let pay_month = PayMonth::new(year, month)?;
    calculate_salary_for_month(employee, records, pay_month, settings)
}

/// Same as [`calculate_salary`] for an already validated month.
pub fn calculate_salary_for_month(
    employee: &Employee,
    records: &[AttendanceRecord],
    pay_month: PayMonth,
    settings: &CalculationSettings,
) -> EngineResult<SalaryCalculationResult> {
    let base_salary = employee.eligible_salary().map_err(|reason| {
        let message = match reason {
            Ineligibility::MissingSalary => format!("missing for employee '{}'", employee.id),
            Ineligibility::NonPositiveSalary => format!(
                "must be positive for employee '{}', got {}",
                employee.id,
                employee.monthly_salary.unwrap_or_default()
            ),
            Ineligibility::SubCentSalary => format!(
                "must be a whole number of cents for employee '{}', got {}",
                employee.id,
                employee.monthly_salary.unwrap_or_default()
            ),
        };
        EngineError::invalid_input("monthly_salary", message)
    })?;
    // Drops trailing zero places only; sub-cent values were rejected above
    let base_salary = round_currency(base_salary);
    ensure_records_belong_to(&employee.id, records)?;

    let in_month = records_in_month(records, pay_month);
    let dropped = records.len() - in_month.len();
    if dropped > 0 {
        debug!(
            employee_id = %employee.id,
            dropped,
            "Ignoring attendance records outside the requested month"
        );
    }

    let attendance_counts = count_attendance(in_month.iter().copied());
    let hourly_rate = base_hourly_rate(base_salary, settings)?;
    let overtime_minutes = collect_overtime_minutes(&in_month, settings);
    let overtime_details =
        calculate_overtime_pay(overtime_minutes, hourly_rate, settings.overtime_multipliers())?;
    let calculated_salary = apply_absence_policy(base_salary, &attendance_counts, settings)?;
    let total_payable = calculated_salary
        .checked_add(overtime_details.total_overtime_pay)
        .ok_or_else(|| EngineError::amount_overflow("total payable"))?;

    debug!(
        employee_id = %employee.id,
        year = pay_month.year(),
        month = pay_month.month(),
        records = in_month.len(),
        overtime_pay = %overtime_details.total_overtime_pay,
        total_payable = %total_payable,
        "Salary calculated"
    );

    Ok(SalaryCalculationResult {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        employee_surname: employee.surname.clone(),
        year: pay_month.year(),
        month: pay_month.month(),
        base_salary,
        attendance_counts,
        overtime_details,
        calculated_salary,
        total_payable,
    })
}
