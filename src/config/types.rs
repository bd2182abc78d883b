//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the validated
//! [`CalculationSettings`] the calculator consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the salary policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier of the policy (e.g., "STANDARD").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// How absences affect the calculated salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsencePolicy {
    /// The full monthly salary is paid regardless of absences.
    #[default]
    FixedMonthly,
    /// One daily rate (`monthly / standard_working_days`) is deducted per
    /// absent day.
    DeductAbsentDays,
}

/// Multipliers applied to the base hourly rate for each overtime category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for weekday overtime.
    pub weekday: Decimal,
    /// Multiplier for weekend overtime.
    pub weekend: Decimal,
    /// Multiplier for public holiday overtime.
    pub holiday: Decimal,
}

/// A work schedule effective from a given date, as read from
/// `schedules/<date>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSchedule {
    /// The date from which this schedule applies.
    pub effective_date: NaiveDate,
    /// Hours in a standard working day.
    pub standard_daily_hours: Decimal,
    /// Working days in a standard month.
    pub standard_working_days: u32,
    /// Absence handling; defaults to a fixed monthly salary.
    #[serde(default)]
    pub absence_policy: AbsencePolicy,
    /// Overtime multipliers.
    pub overtime_multipliers: OvertimeMultipliers,
}

impl WorkSchedule {
    /// Validates the schedule into calculation settings.
    pub fn settings(&self) -> EngineResult<CalculationSettings> {
        CalculationSettings::new(
            self.standard_daily_hours,
            self.standard_working_days,
            self.overtime_multipliers,
            self.absence_policy,
        )
    }
}

/// The explicit parameters of a salary calculation.
///
/// # Example
///
/// ```
/// use salary_engine::config::{AbsencePolicy, CalculationSettings, OvertimeMultipliers};
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
/// assert_eq!(settings.standard_monthly_hours(), Decimal::new(176, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSettings {
    standard_daily_hours: Decimal,
    standard_working_days: u32,
    overtime_multipliers: OvertimeMultipliers,
    absence_policy: AbsencePolicy,
}

impl CalculationSettings {
    /// Builds settings, rejecting non-positive hours, days or multipliers
    /// with [`EngineError::InvalidConfig`].
    pub fn new(
        standard_daily_hours: Decimal,
        standard_working_days: u32,
        overtime_multipliers: OvertimeMultipliers,
        absence_policy: AbsencePolicy,
    ) -> EngineResult<Self> {
        ensure_positive("standard_daily_hours", standard_daily_hours)?;
        if standard_working_days == 0 {
            return Err(EngineError::InvalidConfig {
                field: "standard_working_days".to_string(),
                message: "must be positive".to_string(),
            });
        }
        ensure_positive("overtime_multipliers.weekday", overtime_multipliers.weekday)?;
        ensure_positive("overtime_multipliers.weekend", overtime_multipliers.weekend)?;
        ensure_positive("overtime_multipliers.holiday", overtime_multipliers.holiday)?;

        Ok(Self {
            standard_daily_hours,
            standard_working_days,
            overtime_multipliers,
            absence_policy,
        })
    }

    /// Hours in a standard working day.
    pub fn standard_daily_hours(&self) -> Decimal {
        self.standard_daily_hours
    }

    /// The daily threshold expressed in minutes.
    pub fn daily_threshold_minutes(&self) -> Decimal {
        self.standard_daily_hours * Decimal::from(60)
    }

    /// Working days in a standard month.
    pub fn standard_working_days(&self) -> u32 {
        self.standard_working_days
    }

    /// Hours in a standard month.
    pub fn standard_monthly_hours(&self) -> Decimal {
        Decimal::from(self.standard_working_days) * self.standard_daily_hours
    }

    /// The overtime multipliers.
    pub fn overtime_multipliers(&self) -> OvertimeMultipliers {
        self.overtime_multipliers
    }

    /// The absence policy.
    pub fn absence_policy(&self) -> AbsencePolicy {
        self.absence_policy
    }
}

fn ensure_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be positive, got {}", value),
        });
    }
    Ok(())
}

/// The complete salary policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    /// Work schedules by effective date (sorted oldest first).
    schedules: Vec<WorkSchedule>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, schedules: Vec<WorkSchedule>) -> Self {
        let mut sorted = schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            schedules: sorted,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns all schedules, oldest first.
    pub fn schedules(&self) -> &[WorkSchedule] {
        &self.schedules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn multipliers() -> OvertimeMultipliers {
        OvertimeMultipliers {
            weekday: dec("1.5"),
            weekend: dec("2.0"),
            holiday: dec("2.0"),
        }
    }

    #[test]
    fn test_daily_threshold_minutes() {
        let settings =
            CalculationSettings::new(dec("7.5"), 22, multipliers(), AbsencePolicy::FixedMonthly)
                .unwrap();
        assert_eq!(settings.daily_threshold_minutes(), dec("450"));
    }

    #[test]
    fn test_zero_daily_hours_rejected() {
        let result =
            CalculationSettings::new(Decimal::ZERO, 22, multipliers(), AbsencePolicy::FixedMonthly);
        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "standard_daily_hours")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_working_days_rejected() {
        let result =
            CalculationSettings::new(dec("8"), 0, multipliers(), AbsencePolicy::FixedMonthly);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut bad = multipliers();
        bad.holiday = dec("-2.0");
        let result = CalculationSettings::new(dec("8"), 22, bad, AbsencePolicy::FixedMonthly);
        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "overtime_multipliers.holiday")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_absence_policy_defaults_to_fixed_monthly() {
        let yaml = r#"
effective_date: 2024-01-01
standard_daily_hours: "8"
standard_working_days: 22
overtime_multipliers:
  weekday: "1.5"
  weekend: "2.0"
  holiday: "2.0"
"#;
        let schedule: WorkSchedule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schedule.absence_policy, AbsencePolicy::FixedMonthly);
        assert_eq!(schedule.settings().unwrap().standard_working_days(), 22);
    }

    #[test]
    fn test_policy_config_sorts_schedules() {
        let schedule = |date: &str| WorkSchedule {
            effective_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            standard_daily_hours: dec("8"),
            standard_working_days: 22,
            absence_policy: AbsencePolicy::FixedMonthly,
            overtime_multipliers: multipliers(),
        };
        let config = PolicyConfig::new(
            PolicyMetadata {
                code: "TEST".to_string(),
                name: "Test".to_string(),
                version: "1".to_string(),
            },
            vec![schedule("2025-01-01"), schedule("2024-01-01")],
        );
        assert_eq!(
            config.schedules()[0].effective_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
