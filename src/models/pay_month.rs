//! Calendar month model.
//!
//! This module contains the [`PayMonth`] type, the validated (year, month)
//! pair every salary calculation is scoped to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The earliest year accepted for a calculation.
pub const MIN_YEAR: i32 = 1000;
/// The latest year accepted for a calculation.
pub const MAX_YEAR: i32 = 9999;

/// The plain `{ year, month }` form used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayMonthParts {
    /// Four-digit calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

/// A calendar month with its first and last day resolved.
///
/// # Example
///
/// ```
/// use salary_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let march = PayMonth::new(2024, 3).unwrap();
/// assert_eq!(march.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(march.last_day(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
///
/// assert!(PayMonth::new(2024, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PayMonthParts", into = "PayMonthParts")]
pub struct PayMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl PayMonth {
    /// Validates and builds a pay month.
    ///
    /// Fails with [`EngineError::InvalidInput`] when the year is not a
    /// four-digit year or the month is outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(EngineError::invalid_input(
                "year",
                format!("must be a four-digit year, got {}", year),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_input(
                "month",
                format!("must be between 1 and 12, got {}", month),
            ));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::invalid_input("month", format!("{}-{:02} is not a valid month", year, month))
        })?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "month",
                    format!("{}-{:02} has no resolvable last day", year, month),
                )
            })?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Checks if a date falls within this month, inclusive of both ends.
    ///
    /// ```
    /// use salary_engine::models::PayMonth;
    /// use chrono::NaiveDate;
    ///
    /// let march = PayMonth::new(2024, 3).unwrap();
    /// assert!(march.contains_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
    /// assert!(!march.contains_date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    /// assert!(!march.contains_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl TryFrom<PayMonthParts> for PayMonth {
    type Error = EngineError;

    fn try_from(parts: PayMonthParts) -> Result<Self, Self::Error> {
        PayMonth::new(parts.year, parts.month)
    }
}

impl From<PayMonth> for PayMonthParts {
    fn from(month: PayMonth) -> Self {
        PayMonthParts {
            year: month.year,
            month: month.month,
        }
    }
}
