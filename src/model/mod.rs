//! API data transfer objects.
//!
//! These types define the JSON surface of the backend. Controllers convert
//! between DTOs and the domain parameter types in `server::model`; nothing
//! below the controller layer depends on this module.

pub mod api;
pub mod attendance;
pub mod jobs;
pub mod member;
pub mod notification;
pub mod plan;
pub mod receptionist;
