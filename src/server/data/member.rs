use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::member::{MemberUpdate, NewMember};
use entity::enums::Status;

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(&self, params: NewMember) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone: ActiveValue::Set(params.phone),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// All non-soft-deleted members, oldest first.
    pub async fn find_all_active(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Status.eq(Status::Active))
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        member: entity::member::Model,
        status: Status,
    ) -> Result<entity::member::Model, DbErr> {
        let mut active: entity::member::ActiveModel = member.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await
    }

    /// Applies a partial update; `None` fields keep their stored value.
    pub async fn update(
        &self,
        member: entity::member::Model,
        params: MemberUpdate,
    ) -> Result<entity::member::Model, DbErr> {
        let mut active: entity::member::ActiveModel = member.into();
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        active.update(self.db).await
    }
}
