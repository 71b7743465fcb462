use sea_orm::entity::prelude::*;

use crate::enums::{PlanDuration, PlanType, Status};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "membership_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plan_type: PlanType,
    pub price: f64,
    pub description: String,
    pub duration: PlanDuration,
    pub status: Status,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::membership::Entity")]
    Membership,
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
