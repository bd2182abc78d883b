//! Configuration loading and management for the Salary Engine.
//!
//! This module provides functionality to load salary policies from YAML
//! files: the standard working day and month, overtime multipliers and the
//! absence policy, each effective from a given date.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AbsencePolicy, CalculationSettings, OvertimeMultipliers, PolicyConfig, PolicyMetadata,
    WorkSchedule,
};
