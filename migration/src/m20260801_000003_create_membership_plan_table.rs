use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(MembershipPlan::Id))
                    .col(string_len(MembershipPlan::PlanType, 30))
                    .col(double(MembershipPlan::Price))
                    .col(string(MembershipPlan::Description))
                    .col(string_len(MembershipPlan::Duration, 20))
                    .col(string_len(MembershipPlan::Status, 20))
                    .col(
                        timestamp(MembershipPlan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipPlan {
    Table,
    Id,
    PlanType,
    Price,
    Description,
    Duration,
    Status,
    CreatedAt,
}
