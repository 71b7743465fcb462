use sea_orm::entity::prelude::*;

use crate::enums::{Shift, Status};

/// Front-desk staff record. The credential account lives in `user` and is
/// linked by email.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "receptionist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub shift: Shift,
    pub date_of_joining: ChronoDate,
    pub salary: f64,
    pub status: Status,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
