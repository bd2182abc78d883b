//! State shared by the API handlers.

use std::sync::Arc;

use crate::config::{CalculationSettings, ConfigLoader};
use crate::error::EngineResult;
use crate::models::PayMonth;

/// The salary policy loaded at startup. Read-only for the life of the server.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded policy for sharing across handlers.
    pub fn new(policy: ConfigLoader) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Validates a requested period and returns it with the settings of the
    /// schedule in force for it.
    pub fn resolve_period(
        &self,
        year: i32,
        month: u32,
    ) -> EngineResult<(PayMonth, CalculationSettings)> {
        let pay_month = PayMonth::new(year, month)?;
        let settings = self.policy.settings_for(pay_month)?;
        Ok((pay_month, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn state() -> AppState {
        AppState::new(ConfigLoader::load("./config/standard").expect("Failed to load config"))
    }

    #[test]
    fn test_app_state_is_clone_and_send() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_resolve_period_picks_schedule() {
        let (month, settings) = state().resolve_period(2024, 3).unwrap();
        assert_eq!(month.first_day().to_string(), "2024-03-01");
        assert_eq!(settings.standard_working_days(), 22);
    }

    #[test]
    fn test_resolve_period_rejects_bad_month_before_lookup() {
        let err = state().resolve_period(2019, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "month"));
    }

    #[test]
    fn test_resolve_period_before_first_schedule() {
        let err = state().resolve_period(2019, 12).unwrap_err();
        assert!(matches!(err, EngineError::PolicyNotFound { .. }));
    }
}
