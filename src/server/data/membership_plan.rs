use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::plan::PlanRequestDto;
use entity::enums::Status;

pub struct MembershipPlanRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipPlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: PlanRequestDto,
    ) -> Result<entity::membership_plan::Model, DbErr> {
        entity::membership_plan::ActiveModel {
            plan_type: ActiveValue::Set(params.plan_type),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            duration: ActiveValue::Set(params.duration),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::membership_plan::Model>, DbErr> {
        entity::prelude::MembershipPlan::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Plan lookup that hides soft-deleted plans.
    pub async fn find_active_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::membership_plan::Model>, DbErr> {
        entity::prelude::MembershipPlan::find_by_id(id)
            .filter(entity::membership_plan::Column::Status.eq(Status::Active))
            .one(self.db)
            .await
    }

    pub async fn find_all_active(&self) -> Result<Vec<entity::membership_plan::Model>, DbErr> {
        entity::prelude::MembershipPlan::find()
            .filter(entity::membership_plan::Column::Status.eq(Status::Active))
            .order_by_asc(entity::membership_plan::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        plan: entity::membership_plan::Model,
        params: PlanRequestDto,
    ) -> Result<entity::membership_plan::Model, DbErr> {
        let mut active: entity::membership_plan::ActiveModel = plan.into();
        active.plan_type = ActiveValue::Set(params.plan_type);
        active.price = ActiveValue::Set(params.price);
        active.description = ActiveValue::Set(params.description);
        active.duration = ActiveValue::Set(params.duration);
        active.update(self.db).await
    }

    pub async fn set_status(
        &self,
        plan: entity::membership_plan::Model,
        status: Status,
    ) -> Result<entity::membership_plan::Model, DbErr> {
        let mut active: entity::membership_plan::ActiveModel = plan.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await
    }
}
