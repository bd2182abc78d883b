//! Daily overtime detection functionality.
//!
//! This module splits the regular minutes of a present day into ordinary
//! minutes (up to the standard daily threshold) and weekday overtime minutes.

use rust_decimal::Decimal;

use crate::config::CalculationSettings;
use crate::models::AttendanceRecord;

/// The result of detecting daily overtime for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyOvertimeDetection {
    /// Minutes up to the threshold.
    pub ordinary_minutes: Decimal,
    /// Minutes exceeding the threshold (can be zero).
    pub overtime_minutes: Decimal,
}

/// Splits worked minutes at the daily threshold.
///
/// # Arguments
///
/// * `worked_minutes` - Regular minutes recorded for the day
/// * `threshold_minutes` - The standard day expressed in minutes
///
/// # Examples
///
/// ## Day exceeding threshold
///
/// ```
/// use salary_engine::calculation::detect_daily_overtime;
/// use rust_decimal::Decimal;
///
/// let result = detect_daily_overtime(600, Decimal::from(480));
///
/// assert_eq!(result.ordinary_minutes, Decimal::from(480));
/// assert_eq!(result.overtime_minutes, Decimal::from(120));
/// ```
///
/// ## Short day (under threshold)
///
/// ```
/// use salary_engine::calculation::detect_daily_overtime;
/// use rust_decimal::Decimal;
///
/// let result = detect_daily_overtime(240, Decimal::from(480));
///
/// assert_eq!(result.ordinary_minutes, Decimal::from(240));
/// assert_eq!(result.overtime_minutes, Decimal::ZERO);
/// ```
pub fn detect_daily_overtime(worked_minutes: u32, threshold_minutes: Decimal) -> DailyOvertimeDetection {
    let worked = Decimal::from(worked_minutes);

    if worked > threshold_minutes {
        DailyOvertimeDetection {
            ordinary_minutes: threshold_minutes,
            overtime_minutes: worked - threshold_minutes,
        }
    } else {
        DailyOvertimeDetection {
            ordinary_minutes: worked,
            overtime_minutes: Decimal::ZERO,
        }
    }
}

/// Sums weekday overtime minutes over present days.
///
/// Only full-day and half-day records contribute; both use the same
/// threshold.
pub fn weekday_overtime_minutes<'a, I>(records: I, settings: &CalculationSettings) -> Decimal
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let threshold = settings.daily_threshold_minutes();
    records
        .into_iter()
        .filter(|r| r.status.is_present())
        .map(|r| detect_daily_overtime(r.worked_minutes_regular, threshold).overtime_minutes)
        .sum()
}
