use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::enums::{AttendanceStatus, RecordedBy};

pub struct AttendanceLogRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        member_id: i32,
        check_in_time: NaiveDateTime,
        status: AttendanceStatus,
        recorded_by: RecordedBy,
    ) -> Result<entity::attendance_log::Model, DbErr> {
        entity::attendance_log::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            check_in_time: ActiveValue::Set(check_in_time),
            check_out_time: ActiveValue::Set(None),
            status: ActiveValue::Set(status),
            recorded_by: ActiveValue::Set(recorded_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// The member's open session, if any: the log with no check-out time,
    /// tie-broken by latest check-in time.
    pub async fn find_open_session(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::attendance_log::Model>, DbErr> {
        entity::prelude::AttendanceLog::find()
            .filter(entity::attendance_log::Column::MemberId.eq(member_id))
            .filter(entity::attendance_log::Column::CheckOutTime.is_null())
            .order_by_desc(entity::attendance_log::Column::CheckInTime)
            .one(self.db)
            .await
    }

    pub async fn find_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::attendance_log::Model>, DbErr> {
        entity::prelude::AttendanceLog::find()
            .filter(entity::attendance_log::Column::MemberId.eq(member_id))
            .order_by_asc(entity::attendance_log::Column::CheckInTime)
            .all(self.db)
            .await
    }

    pub async fn find_by_status(
        &self,
        status: AttendanceStatus,
    ) -> Result<Vec<entity::attendance_log::Model>, DbErr> {
        entity::prelude::AttendanceLog::find()
            .filter(entity::attendance_log::Column::Status.eq(status))
            .order_by_asc(entity::attendance_log::Column::CheckInTime)
            .all(self.db)
            .await
    }

    /// Logs whose check-in time falls within `[start, end]`.
    pub async fn find_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::attendance_log::Model>, DbErr> {
        entity::prelude::AttendanceLog::find()
            .filter(entity::attendance_log::Column::CheckInTime.gte(start))
            .filter(entity::attendance_log::Column::CheckInTime.lte(end))
            .order_by_asc(entity::attendance_log::Column::CheckInTime)
            .all(self.db)
            .await
    }

    /// Closes a session. The row is never mutated again afterwards.
    pub async fn set_check_out(
        &self,
        log: entity::attendance_log::Model,
        check_out_time: NaiveDateTime,
    ) -> Result<entity::attendance_log::Model, DbErr> {
        let mut active: entity::attendance_log::ActiveModel = log.into();
        active.check_out_time = ActiveValue::Set(Some(check_out_time));
        active.update(self.db).await
    }
}
