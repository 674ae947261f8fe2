use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::warn;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Issues a signed session token for `username`, valid for
/// `jwt_config.access_token_expiry` seconds from the moment of issuance.
pub fn create_session_token(username: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry of a session token and returns its claims.
///
/// Expiry is enforced without leeway: a token is rejected from the first
/// second after its `exp` claim.
pub fn verify_session_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    // Session tokens carry no audience claim and none is required of them
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        warn!("Token verification failed: {}", e);
        AppError::unauthorized(anyhow::anyhow!("Invalid or missing token"))
    })
}
