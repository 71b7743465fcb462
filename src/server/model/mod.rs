//! Operation-specific parameter types for the service and data layers.
//!
//! Repositories take these instead of long argument lists; services build
//! them from DTOs at the controller boundary.

pub mod account;
pub mod attendance;
pub mod member;
pub mod receptionist;
