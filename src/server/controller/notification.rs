use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError, middleware::actor::Actor, service::notification::NotificationService,
    state::AppState,
};

/// GET /api/v1/notifications/unread (owner only)
pub async fn list_unread(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let notifications = NotificationService::new(&state.db).list_unread_owner().await?;
    Ok(Json(notifications))
}

/// POST /api/v1/notifications/{id}/read (owner only)
pub async fn mark_as_read(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let notification = NotificationService::new(&state.db).mark_as_read(id).await?;
    Ok(Json(notification))
}
