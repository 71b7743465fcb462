use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::member::{
        CreateMemberDto, PaymentRangeQuery, RecordPaymentDto, RenewMembershipDto, UpdateMemberDto,
    },
    server::{error::AppError, service::member::MemberService, state::AppState},
};

/// POST /api/v1/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(dto): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).create_member(dto).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/members
pub async fn list_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).list_members().await?;
    Ok(Json(members))
}

/// GET /api/v1/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get_member(id).await?;
    Ok(Json(member))
}

/// PATCH /api/v1/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).update_member(id, dto).await?;
    Ok(Json(member))
}

/// DELETE /api/v1/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db).delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/members/{id}/activate
pub async fn activate_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).activate_member(id).await?;
    Ok(Json(member))
}

/// POST /api/v1/members/{id}/deactivate
pub async fn deactivate_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).deactivate_member(id).await?;
    Ok(Json(member))
}

/// POST /api/v1/members/{id}/renew
pub async fn renew_membership(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<RenewMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).renew_membership(id, dto).await?;
    Ok(Json(member))
}

/// POST /api/v1/members/{id}/payments
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = MemberService::new(&state.db).record_payment(id, dto).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/members/{id}/payments
pub async fn list_payments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payments = MemberService::new(&state.db).list_payments(id).await?;
    Ok(Json(payments))
}

/// GET /api/v1/members/{id}/payments/range?start=...&end=...
pub async fn list_payments_in_range(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<PaymentRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let payments = MemberService::new(&state.db)
        .list_payments_between(id, query.start, query.end)
        .await?;
    Ok(Json(payments))
}
