use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000002_create_member_table::Member,
    m20260801_000003_create_membership_plan_table::MembershipPlan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Membership::Table)
                    .if_not_exists()
                    .col(pk_auto(Membership::Id))
                    .col(integer_uniq(Membership::MemberId))
                    .col(integer(Membership::PlanId))
                    .col(date(Membership::StartDate))
                    .col(date(Membership::EndDate))
                    .col(boolean(Membership::AutoRenew))
                    .col(string_len(Membership::Status, 20))
                    .col(date(Membership::RenewalDate))
                    .col(
                        timestamp(Membership::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_member_id")
                            .from(Membership::Table, Membership::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_plan_id")
                            .from(Membership::Table, Membership::PlanId)
                            .to(MembershipPlan::Table, MembershipPlan::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Membership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Membership {
    Table,
    Id,
    MemberId,
    PlanId,
    StartDate,
    EndDate,
    AutoRenew,
    Status,
    RenewalDate,
    CreatedAt,
}
