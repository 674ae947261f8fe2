//! Middleware and extractors for cross-cutting request concerns.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor checks the header shape, verifies the
//!    token signature and expiry, then consults the revocation blacklist
//! 3. The handler runs only if every check passes, otherwise the request is
//!    rejected with a uniform 401 body

pub mod auth;
