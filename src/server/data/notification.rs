use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::enums::Audience;

pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        title: String,
        message: String,
        audience: Audience,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            title: ActiveValue::Set(title),
            message: ActiveValue::Set(message),
            audience: ActiveValue::Set(audience),
            read_flag: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Latest unread notifications for an audience, newest first, capped at 20.
    pub async fn find_unread(
        &self,
        audience: Audience,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::Audience.eq(audience))
            .filter(entity::notification::Column::ReadFlag.eq(false))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(20)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id).one(self.db).await
    }

    pub async fn mark_read(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();
        active.read_flag = ActiveValue::Set(true);
        active.update(self.db).await
    }
}
