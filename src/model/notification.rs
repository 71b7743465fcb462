use chrono::{DateTime, Utc};
use entity::enums::Audience;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(n: entity::notification::Model) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            audience: n.audience,
            read: n.read_flag,
            created_at: n.created_at,
        }
    }
}
