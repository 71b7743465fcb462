//! Backend implementation: API endpoints, business logic and data access.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller identity resolution
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database initialization and startup jobs
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Daily membership status reconciliation
//!
//! A typical request flows router -> middleware -> controller -> service ->
//! data, with the service layer owning transaction boundaries so that each
//! mutating operation's read-modify-write sequence is atomic.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
