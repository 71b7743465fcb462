use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Receptionist::Table)
                    .if_not_exists()
                    .col(pk_auto(Receptionist::Id))
                    .col(string_uniq(Receptionist::Email))
                    .col(string(Receptionist::FirstName))
                    .col(string(Receptionist::LastName))
                    .col(string_null(Receptionist::Phone))
                    .col(string_len(Receptionist::Shift, 20))
                    .col(date(Receptionist::DateOfJoining))
                    .col(double(Receptionist::Salary))
                    .col(string_len(Receptionist::Status, 20))
                    .col(
                        timestamp(Receptionist::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Receptionist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Receptionist {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Phone,
    Shift,
    DateOfJoining,
    Salary,
    Status,
    CreatedAt,
}
