//! Attendance record validation and month-boundary filtering.
//!
//! Callers are expected to hand over only one employee's records for one
//! month. Both conditions are checked again here: a foreign employee id is
//! an error, a date outside the month is silently dropped.

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayMonth};

/// Fails with [`EngineError::InvalidInput`] if any record belongs to a
/// different employee.
///
/// Every record is checked, including records outside the target month.
pub fn ensure_records_belong_to(employee_id: &str, records: &[AttendanceRecord]) -> EngineResult<()> {
    match records.iter().find(|r| r.employee_id != employee_id) {
        Some(foreign) => Err(EngineError::invalid_input(
            "employee_id",
            format!(
                "attendance record dated {} belongs to '{}', expected '{}'",
                foreign.date, foreign.employee_id, employee_id
            ),
        )),
        None => Ok(()),
    }
}

/// Keeps only the records dated within `month`.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::records_in_month;
/// use salary_engine::models::{AttendanceRecord, AttendanceStatus, PayMonth};
/// use chrono::NaiveDate;
///
/// let record = |day: NaiveDate| AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: day,
///     status: AttendanceStatus::PresentFullDay,
///     worked_minutes_regular: 480,
///     worked_minutes_weekend_overtime: 0,
///     worked_minutes_holiday_overtime: 0,
/// };
/// let records = vec![
///     record(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
///     record(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
/// ];
///
/// let march = PayMonth::new(2024, 3).unwrap();
/// let kept = records_in_month(&records, march);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn records_in_month(records: &[AttendanceRecord], month: PayMonth) -> Vec<&AttendanceRecord> {
    records
        .iter()
        .filter(|r| month.contains_date(r.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;

    fn make_record(employee_id: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status: AttendanceStatus::PresentFullDay,
            worked_minutes_regular: 480,
            worked_minutes_weekend_overtime: 0,
            worked_minutes_holiday_overtime: 0,
        }
    }

    #[test]
    fn test_matching_records_pass() {
        let records = vec![
            make_record("emp_001", "2024-03-04"),
            make_record("emp_001", "2024-03-05"),
        ];
        assert!(ensure_records_belong_to("emp_001", &records).is_ok());
    }

    #[test]
    fn test_empty_records_pass() {
        assert!(ensure_records_belong_to("emp_001", &[]).is_ok());
    }

    #[test]
    fn test_foreign_record_is_rejected() {
        let records = vec![
            make_record("emp_001", "2024-03-04"),
            make_record("emp_002", "2024-03-05"),
        ];

        match ensure_records_belong_to("emp_001", &records) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "employee_id");
                assert!(message.contains("emp_002"));
                assert!(message.contains("2024-03-05"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_record_outside_month_is_still_rejected() {
        let records = vec![make_record("emp_002", "2023-01-01")];
        assert!(ensure_records_belong_to("emp_001", &records).is_err());
    }

    #[test]
    fn test_records_in_month_drops_neighbouring_months() {
        let records = vec![
            make_record("emp_001", "2024-02-29"),
            make_record("emp_001", "2024-03-01"),
            make_record("emp_001", "2024-03-31"),
            make_record("emp_001", "2024-04-01"),
            make_record("emp_001", "2025-03-10"),
        ];

        let kept = records_in_month(&records, PayMonth::new(2024, 3).unwrap());
        let dates: Vec<String> = kept.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-31"]);
    }
}
