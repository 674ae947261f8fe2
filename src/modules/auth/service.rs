use tracing::{info, instrument};

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;

use super::blacklist::TokenBlacklist;
use super::model::{LoginResponse, MessageResponse};

pub struct AuthService;

impl AuthService {
    /// Issues a session token for `username`. Any non-empty username is
    /// accepted, this endpoint performs no credential check.
    #[instrument(skip(jwt_config))]
    pub fn login(username: &str, jwt_config: &JwtConfig) -> Result<LoginResponse, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "username must not be empty"
            )));
        }

        let token = create_session_token(username, jwt_config)?;

        info!("Issued session token for {}", username);
        Ok(LoginResponse { token })
    }

    /// Revokes the presented token so it no longer passes the auth gate.
    #[instrument(skip(blacklist, token))]
    pub async fn logout(
        blacklist: &TokenBlacklist,
        token: &str,
        username: &str,
    ) -> MessageResponse {
        blacklist.revoke(token).await;

        info!("Revoked session token for {}", username);
        MessageResponse {
            message: format!("User {} logged out successfully.", username),
        }
    }
}
