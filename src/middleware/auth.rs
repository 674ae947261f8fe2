use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_session_token;

/// Extractor that guards a route behind bearer-token auth.
///
/// Every rejection path produces the same 401 body, so a caller cannot tell
/// a missing header from a bad signature or a revoked token. The specific
/// reason is logged server-side instead.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    /// The exact encoded token the request carried, kept for revocation.
    pub token: String,
}

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.claims.sub
    }
}

fn rejection() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Invalid or missing token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                warn!("Missing authorization header");
                rejection()
            })?;

        // Scheme prefix is case sensitive, whitespace around the token is not
        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                warn!("Malformed authorization header");
                rejection()
            })?;

        let claims = verify_session_token(token, &state.jwt_config)?;

        if state.token_blacklist.is_revoked(token).await {
            warn!("Rejected revoked token for {}", claims.sub);
            return Err(rejection());
        }

        Ok(AuthUser {
            claims,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Request, StatusCode};

    use super::*;
    use crate::config::cors::CorsConfig;
    use crate::config::jwt::JwtConfig;
    use crate::modules::auth::blacklist::TokenBlacklist;
    use crate::modules::users::store::UserStore;
    use crate::utils::jwt::create_session_token;

    fn test_state() -> AppState {
        AppState {
            jwt_config: JwtConfig {
                secret: "middleware-test-secret".to_string(),
                access_token_expiry: 3600,
                fixed_token: None,
            },
            cors_config: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            users: Arc::new(UserStore::new()),
            token_blacklist: Arc::new(TokenBlacklist::new()),
        }
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/users");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn accepts_a_valid_bearer_token() {
        let state = test_state();
        let token = create_session_token("alice", &state.jwt_config).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let auth_user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(auth_user.username(), "alice");
        assert_eq!(auth_user.token, token);
    }

    #[tokio::test]
    async fn trims_whitespace_around_the_token() {
        let state = test_state();
        let token = create_session_token("alice", &state.jwt_config).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer   {token}  ")));

        let auth_user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(auth_user.token, token);
    }

    #[tokio::test]
    async fn rejects_missing_and_malformed_headers() {
        let state = test_state();
        let token = create_session_token("alice", &state.jwt_config).unwrap();

        for header_value in [
            None,
            Some("".to_string()),
            Some("Bearer".to_string()),
            Some("Bearer ".to_string()),
            Some(format!("bearer {token}")),
            Some(format!("Basic {token}")),
            Some(token.clone()),
        ] {
            let mut parts = parts_with_header(header_value.as_deref());
            let err = AuthUser::from_request_parts(&mut parts, &state)
                .await
                .err()
                .unwrap();
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.error.to_string(), "Invalid or missing token");
        }
    }

    #[tokio::test]
    async fn rejects_tokens_signed_with_another_secret() {
        let state = test_state();
        let foreign = JwtConfig {
            secret: "some-other-secret".to_string(),
            access_token_expiry: 3600,
            fixed_token: None,
        };
        let token = create_session_token("alice", &foreign).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Invalid or missing token");
    }

    #[tokio::test]
    async fn rejects_revoked_tokens_with_the_same_body() {
        let state = test_state();
        let token = create_session_token("alice", &state.jwt_config).unwrap();
        state.token_blacklist.revoke(&token).await;

        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Invalid or missing token");
    }
}
