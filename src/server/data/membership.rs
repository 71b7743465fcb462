use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::member::{MembershipUpdate, NewMembership};
use entity::enums::MembershipStatus;

pub struct MembershipRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(&self, params: NewMembership) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            plan_id: ActiveValue::Set(params.plan_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            auto_renew: ActiveValue::Set(params.auto_renew),
            status: ActiveValue::Set(params.status),
            renewal_date: ActiveValue::Set(params.renewal_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::membership::Model>, DbErr> {
        entity::prelude::Membership::find()
            .filter(entity::membership::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::membership::Model>, DbErr> {
        entity::prelude::Membership::find().all(self.db).await
    }

    pub async fn set_status(
        &self,
        membership: entity::membership::Model,
        status: MembershipStatus,
    ) -> Result<entity::membership::Model, DbErr> {
        let mut active: entity::membership::ActiveModel = membership.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await
    }

    /// Applies a partial update; `None` fields keep their stored value.
    pub async fn update(
        &self,
        membership: entity::membership::Model,
        params: MembershipUpdate,
    ) -> Result<entity::membership::Model, DbErr> {
        let mut active: entity::membership::ActiveModel = membership.into();
        if let Some(plan_id) = params.plan_id {
            active.plan_id = ActiveValue::Set(plan_id);
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(renewal_date) = params.renewal_date {
            active.renewal_date = ActiveValue::Set(renewal_date);
        }
        if let Some(auto_renew) = params.auto_renew {
            active.auto_renew = ActiveValue::Set(auto_renew);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        active.update(self.db).await
    }
}
