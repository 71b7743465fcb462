//! Request-boundary middleware.
//!
//! The only middleware the core needs is caller identity: the authentication
//! layer in front of this service puts the caller's role on the request, and
//! [`actor::Actor`] resolves it into an enumerated role exactly once. No code
//! below the controllers inspects authority strings.

pub mod actor;
