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
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::MemberId))
                    .col(double(Payment::AmountPaid))
                    .col(date(Payment::PaymentDate))
                    .col(string_len(Payment::PaymentMethod, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_member_id")
                            .from(Payment::Table, Payment::MemberId)
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
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    MemberId,
    AmountPaid,
    PaymentDate,
    PaymentMethod,
}
