//! Attendance log factory for creating test attendance entities.

use chrono::{Local, NaiveDateTime, Utc};
use entity::enums::{AttendanceStatus, RecordedBy};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attendance logs with customizable fields.
///
/// The default log is an open session (no check-out time) starting now.
pub struct AttendanceLogFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    check_in_time: NaiveDateTime,
    check_out_time: Option<NaiveDateTime>,
    status: AttendanceStatus,
    recorded_by: RecordedBy,
}

impl<'a> AttendanceLogFactory<'a> {
    /// Creates a new AttendanceLogFactory with default values.
    ///
    /// Defaults:
    /// - check_in_time: now (local)
    /// - check_out_time: `None` (open session)
    /// - status: `AttendanceStatus::Present`
    /// - recorded_by: `RecordedBy::Receptionist`
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            check_in_time: Local::now().naive_local(),
            check_out_time: None,
            status: AttendanceStatus::Present,
            recorded_by: RecordedBy::Receptionist,
        }
    }

    pub fn check_in_time(mut self, check_in_time: NaiveDateTime) -> Self {
        self.check_in_time = check_in_time;
        self
    }

    pub fn check_out_time(mut self, check_out_time: NaiveDateTime) -> Self {
        self.check_out_time = Some(check_out_time);
        self
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn recorded_by(mut self, recorded_by: RecordedBy) -> Self {
        self.recorded_by = recorded_by;
        self
    }

    /// Builds and inserts the attendance log entity into the database.
    pub async fn build(self) -> Result<entity::attendance_log::Model, DbErr> {
        entity::attendance_log::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            check_in_time: ActiveValue::Set(self.check_in_time),
            check_out_time: ActiveValue::Set(self.check_out_time),
            status: ActiveValue::Set(self.status),
            recorded_by: ActiveValue::Set(self.recorded_by),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open attendance session for the given member.
pub async fn create_open_session(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::attendance_log::Model, DbErr> {
    AttendanceLogFactory::new(db, member_id).build().await
}
