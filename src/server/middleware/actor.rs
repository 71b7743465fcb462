use axum::{extract::FromRequestParts, http::request::Parts};
use entity::enums::RecordedBy;
use std::convert::Infallible;

use crate::server::error::AppError;

/// Header set by the authentication layer in front of this service.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Role of the caller performing the current request.
///
/// Unauthenticated and batch callers fall back to `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Owner,
    Receptionist,
    System,
}

impl ActorRole {
    /// Actor type to stamp on records created during this request.
    pub fn recorded_by(self) -> RecordedBy {
        match self {
            Self::Owner => RecordedBy::Owner,
            Self::Receptionist => RecordedBy::Receptionist,
            Self::System => RecordedBy::System,
        }
    }
}

/// Extractor resolving the caller's role from the request headers.
#[derive(Debug, Clone, Copy)]
pub struct Actor(pub ActorRole);

impl Actor {
    pub fn require_owner(&self) -> Result<(), AppError> {
        match self.0 {
            ActorRole::Owner => Ok(()),
            _ => Err(AppError::Forbidden(
                "Operation requires the owner role".to_string(),
            )),
        }
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ACTOR_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| match value.to_ascii_uppercase().as_str() {
                "OWNER" => ActorRole::Owner,
                "RECEPTIONIST" => ActorRole::Receptionist,
                _ => ActorRole::System,
            })
            .unwrap_or(ActorRole::System);

        Ok(Actor(role))
    }
}
