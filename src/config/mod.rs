//! Configuration modules for the Rollcall API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: session token signing configuration
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required): HMAC signing secret, startup fails without it
//! - `JWT_ACCESS_EXPIRY`: session token lifetime in seconds, default 3600
//! - `JWT_FIXED_TOKEN`: optional static token served by `GET /fixed-token`
//! - `CORS_ALLOWED_ORIGINS`: comma-separated list of allowed origins

pub mod cors;
pub mod jwt;
