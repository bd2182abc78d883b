//! Request types for the Salary Engine API.
//!
//! This module defines the JSON request structures for the `/salary` and
//! `/payroll` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, Employee};

/// Request body for the `/salary` endpoint.
///
/// Contains one employee and that employee's attendance for the month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Four-digit calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// The employee to calculate.
    pub employee: EmployeeRequest,
    /// The employee's attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Four-digit calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// The roster to calculate.
    pub employees: Vec<EmployeeRequest>,
    /// Attendance records for any employee on the roster.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's given name.
    pub name: String,
    /// The employee's surname.
    pub surname: String,
    /// The gross monthly salary, if recorded.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

/// Attendance information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The attendance status.
    pub status: AttendanceStatus,
    /// Minutes worked during regular hours.
    #[serde(default)]
    pub worked_minutes_regular: u32,
    /// Weekend overtime minutes.
    #[serde(default)]
    pub worked_minutes_weekend_overtime: u32,
    /// Holiday overtime minutes.
    #[serde(default)]
    pub worked_minutes_holiday_overtime: u32,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            surname: req.surname,
            monthly_salary: req.monthly_salary,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
            worked_minutes_regular: req.worked_minutes_regular,
            worked_minutes_weekend_overtime: req.worked_minutes_weekend_overtime,
            worked_minutes_holiday_overtime: req.worked_minutes_holiday_overtime,
        }
    }
}
