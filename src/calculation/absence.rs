//! Absence policy application.
//!
//! Turns the base salary into the calculated salary according to the
//! configured [`AbsencePolicy`]. Only days recorded as `absent` are
//! deducted; leave and medical-report days are paid.

use rust_decimal::Decimal;

use crate::config::{AbsencePolicy, CalculationSettings};
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceCounts;

use super::hourly_rate::daily_rate;
use super::rounding::round_currency;

/// Applies the absence policy to a base salary.
///
/// The result never exceeds `base_salary` and never drops below zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `monthly_salary` when the
/// deduction does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::apply_absence_policy;
/// use salary_engine::config::{AbsencePolicy, CalculationSettings, OvertimeMultipliers};
/// use salary_engine::models::AttendanceCounts;
/// use rust_decimal::Decimal;
///
/// let settings = |policy| CalculationSettings::new(
///     Decimal::new(8, 0),
///     22,
///     OvertimeMultipliers {
///         weekday: Decimal::new(15, 1),
///         weekend: Decimal::new(2, 0),
///         holiday: Decimal::new(2, 0),
///     },
///     policy,
/// )
/// .unwrap();
/// let counts = AttendanceCounts { absent_days: 2, ..AttendanceCounts::default() };
/// let base = Decimal::new(22000, 0);
///
/// assert_eq!(
///     apply_absence_policy(base, &counts, &settings(AbsencePolicy::FixedMonthly)).unwrap(),
///     base,
/// );
/// assert_eq!(
///     apply_absence_policy(base, &counts, &settings(AbsencePolicy::DeductAbsentDays)).unwrap(),
///     Decimal::new(20000, 0),
/// );
/// ```
pub fn apply_absence_policy(
    base_salary: Decimal,
    counts: &AttendanceCounts,
    settings: &CalculationSettings,
) -> EngineResult<Decimal> {
    match settings.absence_policy() {
        AbsencePolicy::FixedMonthly => Ok(base_salary),
        AbsencePolicy::DeductAbsentDays => {
            if counts.absent_days == 0 {
                return Ok(base_salary);
            }
            let deduction = daily_rate(base_salary, settings)?
                .checked_mul(Decimal::from(counts.absent_days))
                .map(round_currency)
                .ok_or_else(|| EngineError::amount_overflow("absence deduction"))?;
            // deduction is non-negative, so the difference stays within range
            Ok((base_salary - deduction).max(Decimal::ZERO))
        }
    }
}
