use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::plan::PlanRequestDto,
    server::{
        error::AppError, middleware::actor::Actor, service::plan::PlanService, state::AppState,
    },
};

/// POST /api/v1/plans (owner only)
pub async fn create_plan(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<PlanRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let plan = PlanService::new(&state.db).create_plan(dto).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/plans
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = PlanService::new(&state.db).list_plans().await?;
    Ok(Json(plans))
}

/// GET /api/v1/plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let plan = PlanService::new(&state.db).get_plan(id).await?;
    Ok(Json(plan))
}

/// PUT /api/v1/plans/{id} (owner only)
pub async fn update_plan(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
    Json(dto): Json<PlanRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    let plan = PlanService::new(&state.db).update_plan(id, dto).await?;
    Ok(Json(plan))
}

/// DELETE /api/v1/plans/{id} (owner only)
pub async fn delete_plan(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_owner()?;
    PlanService::new(&state.db).delete_plan(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
