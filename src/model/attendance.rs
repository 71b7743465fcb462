use chrono::{NaiveDateTime, TimeDelta};
use entity::enums::{AttendanceStatus, RecordedBy};
use serde::{Deserialize, Serialize};

/// Check-in request body. Both fields default when omitted: the time to
/// "now" and the status to PRESENT.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckInDto {
    pub check_in_time: Option<NaiveDateTime>,
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckOutDto {
    pub check_out_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RangeQuery {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct AttendanceLogDto {
    pub id: i32,
    pub member_id: i32,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
    pub status: AttendanceStatus,
    pub recorded_by: RecordedBy,
    /// Whole minutes between check-in and check-out; absent while the
    /// session is still open.
    pub duration_minutes: Option<i64>,
}

impl From<entity::attendance_log::Model> for AttendanceLogDto {
    fn from(log: entity::attendance_log::Model) -> Self {
        let duration_minutes = log
            .check_out_time
            .map(|out| (out - log.check_in_time).num_minutes());
        Self {
            id: log.id,
            member_id: log.member_id,
            check_in_time: log.check_in_time,
            check_out_time: log.check_out_time,
            status: log.status,
            recorded_by: log.recorded_by,
            duration_minutes,
        }
    }
}

/// Start of today's local day and the last representable instant within it.
///
/// "Today" covers check-ins in `[start_of_day, start_of_next_day - 1ns)`.
pub fn today_bounds(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = now.date().and_hms_opt(0, 0, 0).unwrap_or(now);
    let end = start + TimeDelta::days(1) - TimeDelta::nanoseconds(1);
    (start, end)
}
