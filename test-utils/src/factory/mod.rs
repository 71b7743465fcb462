//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert into the database and return the stored
//! model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let plan = factory::membership_plan::create_plan(&db).await?;
//! let member = factory::member::create_member(&db).await?;
//!
//! // Create a member with plan and membership in one call
//! let (plan, member, membership) =
//!     factory::helpers::create_member_with_membership(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .email("jo@example.com")
//!     .status(Status::Inactive)
//!     .build()
//!     .await?;
//! ```

pub mod attendance_log;
pub mod helpers;
pub mod member;
pub mod membership;
pub mod membership_plan;

pub use attendance_log::create_open_session;
pub use member::create_member;
pub use membership::create_membership;
pub use membership_plan::create_plan;
