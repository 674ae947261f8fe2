use serde::{Deserialize, Serialize};

// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub iat: usize,
    pub exp: usize,
}

// Query parameters accepted by POST /login
#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub username: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Body of GET /fixed-token, `token` is null when none is configured
#[derive(Debug, Serialize)]
pub struct FixedTokenResponse {
    pub token: Option<String>,
}
