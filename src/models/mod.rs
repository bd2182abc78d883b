//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_month;
mod salary_result;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, Ineligibility};
pub use pay_month::{MAX_YEAR, MIN_YEAR, PayMonth, PayMonthParts};
pub use salary_result::{
    AttendanceCounts, OvertimeDetails, PayrollReport, PayrollTotals, SalaryCalculationResult,
    SkippedEmployee,
};
