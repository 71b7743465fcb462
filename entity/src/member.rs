use sea_orm::entity::prelude::*;

use crate::enums::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub status: Status,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::membership::Entity")]
    Membership,
    #[sea_orm(has_one = "super::fitness_profile::Entity")]
    FitnessProfile,
    #[sea_orm(has_many = "super::attendance_log::Entity")]
    AttendanceLog,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl Related<super::fitness_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessProfile.def()
    }
}

impl Related<super::attendance_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceLog.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
