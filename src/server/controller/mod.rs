//! HTTP request handlers. Controllers stay thin: resolve the actor,
//! deserialize the DTO, delegate to a service, serialize the result.

pub mod attendance;
pub mod jobs;
pub mod member;
pub mod notification;
pub mod plan;
pub mod receptionist;
