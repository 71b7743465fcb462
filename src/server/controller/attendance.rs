use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::attendance::{CheckInDto, CheckOutDto, RangeQuery},
    server::{
        error::AppError,
        middleware::actor::Actor,
        model::attendance::{CheckInParams, CheckOutParams},
        service::attendance::AttendanceService,
        state::AppState,
    },
};
use entity::enums::AttendanceStatus;

/// POST /api/v1/members/{id}/attendance/check-in
///
/// The recording actor is resolved here from the caller's role so the
/// tracker below never inspects authorities.
pub async fn check_in(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i32>,
    Json(dto): Json<CheckInDto>,
) -> Result<impl IntoResponse, AppError> {
    let log = AttendanceService::new(&state.db)
        .check_in(
            id,
            CheckInParams {
                check_in_time: dto.check_in_time,
                status: dto.status,
                recorded_by: actor.0.recorded_by(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// POST /api/v1/members/{id}/attendance/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CheckOutDto>,
) -> Result<impl IntoResponse, AppError> {
    let log = AttendanceService::new(&state.db)
        .check_out(
            id,
            CheckOutParams {
                check_out_time: dto.check_out_time,
            },
        )
        .await?;
    Ok(Json(log))
}

/// GET /api/v1/members/{id}/attendance
pub async fn list_for_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let logs = AttendanceService::new(&state.db).list_for_member(id).await?;
    Ok(Json(logs))
}

/// GET /api/v1/attendance/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<AttendanceStatus>,
) -> Result<impl IntoResponse, AppError> {
    let logs = AttendanceService::new(&state.db).list_by_status(status).await?;
    Ok(Json(logs))
}

/// GET /api/v1/attendance/range?start=..&end=..
pub async fn list_in_range(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let logs = AttendanceService::new(&state.db).list_in_range(range).await?;
    Ok(Json(logs))
}

/// GET /api/v1/attendance/today
pub async fn list_today(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let logs = AttendanceService::new(&state.db).list_today().await?;
    Ok(Json(logs))
}
