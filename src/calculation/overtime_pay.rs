//! Overtime bucketing and pay calculation.
//!
//! This module collects overtime minutes into the weekday, weekend and
//! holiday buckets and prices each bucket at the base hourly rate times its
//! configured multiplier.
//!
//! ## Rate Structure
//!
//! - Weekday: regular minutes beyond the daily threshold on present days
//! - Weekend: recorded weekend overtime minutes, any status
//! - Holiday: recorded holiday overtime minutes, any status

use rust_decimal::Decimal;

use crate::config::{CalculationSettings, OvertimeMultipliers};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, OvertimeDetails};

use super::daily_overtime::weekday_overtime_minutes;
use super::rounding::{round_currency, round_hours};

/// Overtime minutes per category for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OvertimeMinutes {
    /// Weekday overtime minutes.
    pub weekday: Decimal,
    /// Weekend overtime minutes.
    pub weekend: Decimal,
    /// Holiday overtime minutes.
    pub holiday: Decimal,
}

/// Collects overtime minutes from in-month records.
pub fn collect_overtime_minutes(
    records: &[&AttendanceRecord],
    settings: &CalculationSettings,
) -> OvertimeMinutes {
    OvertimeMinutes {
        weekday: weekday_overtime_minutes(records.iter().copied(), settings),
        weekend: records
            .iter()
            .map(|r| Decimal::from(r.worked_minutes_weekend_overtime))
            .sum(),
        holiday: records
            .iter()
            .map(|r| Decimal::from(r.worked_minutes_holiday_overtime))
            .sum(),
    }
}

/// Prices overtime minutes.
///
/// Each category is priced from exact minutes and rounded to cents on its
/// own; `total_overtime_pay` is the sum of the rounded category amounts.
/// Reported hours are rounded to two decimal places.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `monthly_salary` when an amount
/// does not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{calculate_overtime_pay, OvertimeMinutes};
/// use salary_engine::config::OvertimeMultipliers;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let minutes = OvertimeMinutes {
///     weekday: Decimal::from(120),
///     weekend: Decimal::from(240),
///     holiday: Decimal::ZERO,
/// };
/// let multipliers = OvertimeMultipliers {
///     weekday: Decimal::from_str("1.5").unwrap(),
///     weekend: Decimal::from_str("2.0").unwrap(),
///     holiday: Decimal::from_str("2.0").unwrap(),
/// };
///
/// let details = calculate_overtime_pay(minutes, Decimal::from(100), multipliers).unwrap();
///
/// assert_eq!(details.weekday_hours, Decimal::from(2));
/// assert_eq!(details.weekday_pay, Decimal::from(300));
/// assert_eq!(details.weekend_pay, Decimal::from(800));
/// assert_eq!(details.total_overtime_pay, Decimal::from(1100));
/// ```
pub fn calculate_overtime_pay(
    minutes: OvertimeMinutes,
    hourly_rate: Decimal,
    multipliers: OvertimeMultipliers,
) -> EngineResult<OvertimeDetails> {
    let price = |minutes: Decimal, multiplier: Decimal, category: &str| {
        minutes
            .checked_mul(hourly_rate)
            .and_then(|amount| amount.checked_mul(multiplier))
            .and_then(|amount| amount.checked_div(Decimal::from(60)))
            .map(round_currency)
            .ok_or_else(|| EngineError::amount_overflow(&format!("{} overtime pay", category)))
    };
    let hours = |minutes: Decimal| round_hours(minutes / Decimal::from(60));

    let weekday_pay = price(minutes.weekday, multipliers.weekday, "weekday")?;
    let weekend_pay = price(minutes.weekend, multipliers.weekend, "weekend")?;
    let holiday_pay = price(minutes.holiday, multipliers.holiday, "holiday")?;
    let total_overtime_pay = weekday_pay
        .checked_add(weekend_pay)
        .and_then(|sum| sum.checked_add(holiday_pay))
        .ok_or_else(|| EngineError::amount_overflow("total overtime pay"))?;

    Ok(OvertimeDetails {
        weekday_hours: hours(minutes.weekday),
        weekend_hours: hours(minutes.weekend),
        holiday_hours: hours(minutes.holiday),
        weekday_pay,
        weekend_pay,
        holiday_pay,
        total_overtime_pay,
    })
}
