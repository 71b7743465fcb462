use serde::{Deserialize, Serialize};

/// Standard error response body returned by all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
