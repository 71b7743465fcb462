//! Gymflow Test Utils
//!
//! Shared testing utilities for the gymflow backend. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite
//! databases, plus factories for inserting domain entities with sensible
//! defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Member)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
