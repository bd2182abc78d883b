//! Base hourly and daily rate derivation.
//!
//! Rates are derived from the monthly salary and the standard month and are
//! kept unrounded; rounding happens once, on the final amounts.

use rust_decimal::Decimal;

use crate::config::CalculationSettings;
use crate::error::{EngineError, EngineResult};

/// Derives the base hourly rate from a monthly salary.
///
/// `monthly_salary / (standard_working_days * standard_daily_hours)`
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `monthly_salary` when the rate
/// does not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use salary_engine::calculation::base_hourly_rate;
/// use salary_engine::config::{AbsencePolicy, CalculationSettings, OvertimeMultipliers};
/// use rust_decimal::Decimal;
///
/// let settings = CalculationSettings::new(
///     Decimal::new(8, 0),
///     20,
///     OvertimeMultipliers {
///         weekday: Decimal::new(15, 1),
///         weekend: Decimal::new(2, 0),
///         holiday: Decimal::new(2, 0),
///     },
///     AbsencePolicy::FixedMonthly,
/// )
/// .unwrap();
///
/// assert_eq!(
///     base_hourly_rate(Decimal::new(32000, 0), &settings).unwrap(),
///     Decimal::new(200, 0)
/// );
/// ```
pub fn base_hourly_rate(
    monthly_salary: Decimal,
    settings: &CalculationSettings,
) -> EngineResult<Decimal> {
    monthly_salary
        .checked_div(settings.standard_monthly_hours())
        .ok_or_else(|| EngineError::amount_overflow("hourly rate"))
}

/// Derives the daily rate used for absence deductions.
pub fn daily_rate(monthly_salary: Decimal, settings: &CalculationSettings) -> EngineResult<Decimal> {
    monthly_salary
        .checked_div(Decimal::from(settings.standard_working_days()))
        .ok_or_else(|| EngineError::amount_overflow("daily rate"))
}
