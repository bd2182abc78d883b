//! Calculation logic for the Salary Engine.
//!
//! This module contains all the calculation functions for determining a
//! monthly salary from attendance, including month-boundary filtering,
//! attendance classification, daily overtime detection, hourly rate
//! derivation, overtime pay by category, absence policy application, and
//! roster-wide payroll aggregation.

mod absence;
mod attendance_counts;
mod daily_overtime;
mod hourly_rate;
mod month_filter;
mod overtime_pay;
mod payroll;
mod rounding;
mod salary;

pub use absence::apply_absence_policy;
pub use attendance_counts::count_attendance;
pub use daily_overtime::{DailyOvertimeDetection, detect_daily_overtime, weekday_overtime_minutes};
pub use hourly_rate::{base_hourly_rate, daily_rate};
pub use month_filter::{ensure_records_belong_to, records_in_month};
pub use overtime_pay::{OvertimeMinutes, calculate_overtime_pay, collect_overtime_minutes};
pub use payroll::calculate_payroll;
pub use rounding::{CURRENCY_DECIMAL_PLACES, HOURS_DECIMAL_PLACES, round_currency, round_hours};
pub use salary::{calculate_salary, calculate_salary_for_month};
