//! # Rollcall API
//!
//! A user management REST API built with Rust and Axum, secured by bearer
//! session tokens.
//!
//! ## Overview
//!
//! - **Authentication**: HS256 session tokens issued on login and revoked on
//!   logout via an in-memory blacklist
//! - **User Management**: CRUD over user records keyed by a client-chosen id,
//!   with optimistic concurrency on updates
//! - **Request Logging**: every request/response pair is logged with a shared
//!   request id, method, path, status, and latency
//! - **Error Handling**: internal failures collapse to one fixed 500 body,
//!   details stay in the server log
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, CORS)
//! ├── middleware/       # Bearer-token auth extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, logout, token blacklist, fixed token
//! │   └── users/       # User CRUD over the in-memory store
//! └── utils/           # Errors and the token codec
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Request Pipeline
//!
//! ```text
//! CatchPanicLayer
//!   └── logging middleware (request/response pairs)
//!         └── CORS
//!               └── router
//!                     └── AuthUser extractor (protected routes)
//!                           └── handler
//! ```
//!
//! Converted errors and escaped panics both surface as the same masked 500
//! response. Protected routes reject bad credentials with a uniform 401 no
//! matter which check failed.

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
