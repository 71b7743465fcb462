//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state cloned into each request handler.
///
/// `DatabaseConnection` is a connection pool; clones share the pool, so this
/// struct stays cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
