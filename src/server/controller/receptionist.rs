use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::receptionist::{CreateReceptionistDto, UpdateReceptionistDto},
    server::{
        error::AppError, middleware::actor::Actor, service::receptionist::ReceptionistService,
        state::AppState,
    },
};

/// POST /api/v1/receptionists (owner only)
pub async fn create_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<CreateReceptionistDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionist = ReceptionistService::new(&state.db)
        .create_receptionist(dto)
        .await?;
    Ok((StatusCode::CREATED, Json(receptionist)))
}

/// GET /api/v1/receptionists (owner only)
pub async fn list_receptionists(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionists = ReceptionistService::new(&state.db).list_receptionists().await?;
    Ok(Json(receptionists))
}

/// GET /api/v1/receptionists/{id} (owner only)
pub async fn get_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionist = ReceptionistService::new(&state.db).get_receptionist(id).await?;
    Ok(Json(receptionist))
}

/// PATCH /api/v1/receptionists/{id} (owner only)
pub async fn update_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReceptionistDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionist = ReceptionistService::new(&state.db)
        .update_receptionist(id, dto)
        .await?;
    Ok(Json(receptionist))
}

/// DELETE /api/v1/receptionists/{id} (owner only)
pub async fn delete_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    ReceptionistService::new(&state.db).delete_receptionist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/receptionists/{id}/activate (owner only)
pub async fn activate_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionist = ReceptionistService::new(&state.db)
        .activate_receptionist(id)
        .await?;
    Ok(Json(receptionist))
}

/// POST /api/v1/receptionists/{id}/deactivate (owner only)
pub async fn deactivate_receptionist(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let receptionist = ReceptionistService::new(&state.db)
        .deactivate_receptionist(id)
        .await?;
    Ok(Json(receptionist))
}
