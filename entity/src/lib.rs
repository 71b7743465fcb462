//! SeaORM entity definitions for the gymflow database schema.
//!
//! Each module defines one table. Active enums shared across tables live in
//! [`enums`]. The [`prelude`] re-exports every `Entity` under its domain name
//! for concise query code.

pub mod attendance_log;
pub mod enums;
pub mod fitness_profile;
pub mod member;
pub mod membership;
pub mod membership_plan;
pub mod notification;
pub mod payment;
pub mod prelude;
pub mod receptionist;
pub mod user;
