use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceLog::Id))
                    .col(integer(AttendanceLog::MemberId))
                    .col(date_time(AttendanceLog::CheckInTime))
                    .col(date_time_null(AttendanceLog::CheckOutTime))
                    .col(string_len(AttendanceLog::Status, 20))
                    .col(string_len(AttendanceLog::RecordedBy, 20))
                    .col(
                        timestamp(AttendanceLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_log_member_id")
                            .from(AttendanceLog::Table, AttendanceLog::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AttendanceLog {
    Table,
    Id,
    MemberId,
    CheckInTime,
    CheckOutTime,
    Status,
    RecordedBy,
    CreatedAt,
}
