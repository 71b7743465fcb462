use sea_orm::entity::prelude::*;

use crate::enums::MembershipStatus;

/// One membership per member. Dates are local civil dates; `end_date` is
/// `start_date` plus the plan duration and the ACTIVE window is inclusive on
/// both ends.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "membership")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub member_id: i32,
    pub plan_id: i32,
    pub start_date: ChronoDate,
    pub end_date: ChronoDate,
    pub auto_renew: bool,
    pub status: MembershipStatus,
    pub renewal_date: ChronoDate,
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
    #[sea_orm(
        belongs_to = "super::membership_plan::Entity",
        from = "Column::PlanId",
        to = "super::membership_plan::Column::Id"
    )]
    MembershipPlan,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::membership_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MembershipPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
