//! Day classification by attendance status.

use crate::models::{AttendanceCounts, AttendanceRecord, AttendanceStatus};

/// Counts records into the five status buckets.
///
/// Records are counted one per entry; duplicate dates are not merged.
pub fn count_attendance<'a, I>(records: I) -> AttendanceCounts
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut counts = AttendanceCounts::default();
    for record in records {
        match record.status {
            AttendanceStatus::PresentFullDay => counts.full_days += 1,
            AttendanceStatus::PresentHalfDay => counts.half_days += 1,
            AttendanceStatus::OnLeave => counts.leave_days += 1,
            AttendanceStatus::MedicalReport => counts.report_days += 1,
            AttendanceStatus::Absent => counts.absent_days += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            status,
            worked_minutes_regular: 0,
            worked_minutes_weekend_overtime: 0,
            worked_minutes_holiday_overtime: 0,
        }
    }

    #[test]
    fn test_each_status_lands_in_its_bucket() {
        let records = vec![
            make_record(4, AttendanceStatus::PresentFullDay),
            make_record(5, AttendanceStatus::PresentFullDay),
            make_record(6, AttendanceStatus::PresentHalfDay),
            make_record(7, AttendanceStatus::OnLeave),
            make_record(8, AttendanceStatus::MedicalReport),
            make_record(11, AttendanceStatus::MedicalReport),
            make_record(12, AttendanceStatus::Absent),
        ];

        let counts = count_attendance(&records);
        assert_eq!(
            counts,
            AttendanceCounts {
                full_days: 2,
                half_days: 1,
                leave_days: 1,
                report_days: 2,
                absent_days: 1,
            }
        );
    }

    #[test]
    fn test_no_records_gives_zero_counts() {
        let records: Vec<AttendanceRecord> = vec![];
        assert_eq!(count_attendance(&records), AttendanceCounts::default());
    }
}
