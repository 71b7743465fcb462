//! Business logic layer.
//!
//! Services coordinate repositories, open transactions for multi-row
//! writes, and translate domain failures into [`AppError`] variants.
//! Status derivation itself lives in [`membership_status`] as pure
//! functions so both the write paths and the daily sync job share one
//! rule set.
//!
//! [`AppError`]: crate::server::error::AppError

pub mod account;
pub mod attendance;
pub mod member;
pub mod membership_status;
pub mod notification;
pub mod plan;
pub mod receptionist;

#[cfg(test)]
mod test;
