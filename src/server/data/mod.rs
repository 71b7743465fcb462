//! Database repository layer for all domain entities.
//!
//! Repositories perform the CRUD and filter queries for one table each. They
//! are generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against the connection pool or inside a transaction opened by a service.

pub mod attendance_log;
pub mod fitness_profile;
pub mod member;
pub mod membership;
pub mod membership_plan;
pub mod notification;
pub mod payment;
pub mod receptionist;
pub mod user;

#[cfg(test)]
mod test;
