//! Session authentication module.
//!
//! Issues bearer session tokens on login, revokes them on logout, and
//! serves the statically configured diagnostic token.

pub mod blacklist;
pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::init_auth_router;
