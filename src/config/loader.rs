//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary
//! policies from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayMonth;

use super::types::{CalculationSettings, PolicyConfig, PolicyMetadata, WorkSchedule};

/// Loads and provides access to a salary policy.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── policy.yaml           # Policy metadata
/// └── schedules/
///     └── 2020-01-01.yaml   # Work schedule effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::PayMonth;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// let settings = loader.settings_for(PayMonth::new(2024, 3).unwrap()).unwrap();
/// println!("Standard day: {} hours", settings.standard_daily_hours());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or holds a schedule with out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let schedules = Self::load_schedules(&path.join("schedules"))?;

        Ok(Self {
            config: PolicyConfig::new(metadata, schedules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the schedules directory.
    fn load_schedules(dir: &Path) -> EngineResult<Vec<WorkSchedule>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<WorkSchedule>(&path)?;
                // Reject bad values at load time, not on first request.
                schedule.settings()?;
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Gets the schedule effective on the given date.
    ///
    /// Picks the most recent schedule whose effective date is on or before
    /// `date`.
    pub fn schedule_on(&self, date: NaiveDate) -> EngineResult<&WorkSchedule> {
        self.config
            .schedules()
            .iter()
            .rev()
            .find(|s| s.effective_date <= date)
            .ok_or(EngineError::PolicyNotFound { date })
    }

    /// Resolves the calculation settings for a month.
    ///
    /// The schedule effective on the first day of the month applies to the
    /// whole month.
    pub fn settings_for(&self, month: PayMonth) -> EngineResult<CalculationSettings> {
        self.schedule_on(month.first_day())?.settings()
    }
}
