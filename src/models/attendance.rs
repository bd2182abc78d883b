//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] struct and the
//! [`AttendanceStatus`] enum for the daily attendance entries of an employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How an employee's day was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full working day.
    PresentFullDay,
    /// Present for half of the working day.
    PresentHalfDay,
    /// On approved leave.
    OnLeave,
    /// Absent with a medical report.
    MedicalReport,
    /// Absent without leave or report.
    Absent,
}

impl AttendanceStatus {
    /// Returns true for the statuses whose regular minutes count toward
    /// weekday overtime.
    pub fn is_present(self) -> bool {
        matches!(
            self,
            AttendanceStatus::PresentFullDay | AttendanceStatus::PresentHalfDay
        )
    }
}

/// A single day of attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Minutes worked during regular hours.
    #[serde(default)]
    pub worked_minutes_regular: u32,
    /// Minutes of overtime worked on a weekend.
    #[serde(default)]
    pub worked_minutes_weekend_overtime: u32,
    /// Minutes of overtime worked on a public holiday.
    #[serde(default)]
    pub worked_minutes_holiday_overtime: u32,
}
