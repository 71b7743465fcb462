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
                    .table(FitnessProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(FitnessProfile::Id))
                    .col(integer_uniq(FitnessProfile::MemberId))
                    .col(double(FitnessProfile::Height))
                    .col(double(FitnessProfile::Weight))
                    .col(text_null(FitnessProfile::MedicalConditions))
                    .col(text_null(FitnessProfile::Injuries))
                    .col(text_null(FitnessProfile::Allergies))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fitness_profile_member_id")
                            .from(FitnessProfile::Table, FitnessProfile::MemberId)
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
            .drop_table(Table::drop().table(FitnessProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FitnessProfile {
    Table,
    Id,
    MemberId,
    Height,
    Weight,
    MedicalConditions,
    Injuries,
    Allergies,
}
