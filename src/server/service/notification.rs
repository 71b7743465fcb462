use sea_orm::ConnectionTrait;

use crate::{
    model::notification::NotificationDto,
    server::{data::notification::NotificationRepository, error::AppError},
};
use entity::enums::Audience;

pub struct NotificationService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists an owner-facing notification.
    pub async fn notify_owner(&self, title: &str, message: &str) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .insert(title.to_string(), message.to_string(), Audience::Owner)
            .await?;
        Ok(())
    }

    /// Most recent unread owner notifications, capped at 20.
    pub async fn list_unread_owner(&self) -> Result<Vec<NotificationDto>, AppError> {
        let notifications = NotificationRepository::new(self.db)
            .find_unread(Audience::Owner)
            .await?;
        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }

    pub async fn mark_as_read(&self, id: i32) -> Result<NotificationDto, AppError> {
        let repo = NotificationRepository::new(self.db);
        let notification = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;
        let updated = repo.mark_read(notification).await?;
        Ok(NotificationDto::from(updated))
    }
}
