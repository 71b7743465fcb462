use chrono::NaiveDateTime;
use entity::enums::{AttendanceStatus, RecordedBy};

/// Check-in input resolved at the request boundary.
///
/// `recorded_by` is always present: the controller maps the caller's actor
/// role before the tracker runs, so the core never inspects authorities.
pub struct CheckInParams {
    pub check_in_time: Option<NaiveDateTime>,
    pub status: Option<AttendanceStatus>,
    pub recorded_by: RecordedBy,
}

pub struct CheckOutParams {
    pub check_out_time: Option<NaiveDateTime>,
}
