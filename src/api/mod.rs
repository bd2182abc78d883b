//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for calculating a single
//! employee's salary and a roster-wide payroll report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRecordRequest, EmployeeRequest, PayrollRequest, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
