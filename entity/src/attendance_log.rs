use sea_orm::entity::prelude::*;

use crate::enums::{AttendanceStatus, RecordedBy};

/// One gym visit. A row with `check_out_time = NULL` is an open session;
/// at most one open session may exist per member at any time. Once the
/// check-out time is set the row is never mutated again.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub check_in_time: ChronoDateTime,
    pub check_out_time: Option<ChronoDateTime>,
    pub status: AttendanceStatus,
    pub recorded_by: RecordedBy,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
