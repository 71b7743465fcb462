//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type for the whole backend. Domain
//! failures carry a kind (not found, duplicate, conflict, ...) that maps to a
//! status code here; infrastructure failures (database, scheduler, IO) map to
//! 500 with the detail logged server-side only.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind/serve error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Password hashing failed in the identity service.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Member, membership or plan absent. 404.
    #[error("{0}")]
    NotFound(String),

    /// Email already used by another member or account. 409.
    #[error("{0}")]
    Duplicate(String),

    /// Operation attempted on a non-ACTIVE member. 422.
    #[error("{0}")]
    Inactive(String),

    /// Attendance session already open, or none open to close. 409.
    #[error("{0}")]
    Conflict(String),

    /// Check-out time before the session's check-in time. 400.
    #[error("{0}")]
    InvalidTimeRange(String),

    /// Malformed request input. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Caller's role does not permit the operation. 403.
    #[error("{0}")]
    Forbidden(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Duplicate(msg) | Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Inactive(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::InvalidTimeRange(msg) | Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
