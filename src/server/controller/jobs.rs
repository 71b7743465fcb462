use axum::{extract::State, response::IntoResponse, Json};

use crate::server::{
    error::AppError, middleware::actor::Actor, scheduler::status_sync, state::AppState,
};

/// POST /api/v1/jobs/membership-status/sync
///
/// Manual trigger for the nightly reconciliation pass. Owner only.
pub async fn trigger_status_sync(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let result = status_sync::run_sync(&state.db, true).await?;
    Ok(Json(result))
}
