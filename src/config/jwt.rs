use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub fixed_token: Option<String>,
}

impl JwtConfig {
    /// Loads signing configuration from the environment. The signing secret
    /// has no fallback value, a missing `JWT_SECRET` aborts startup.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            fixed_token: env::var("JWT_FIXED_TOKEN").ok(),
        }
    }
}
