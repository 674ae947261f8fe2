use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{FixedTokenResponse, LoginParams, LoginResponse, MessageResponse};
use super::service::AuthService;

/// Issue a session token for the given username
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&params.username, &state.jwt_config)?;
    Ok(Json(response))
}

/// Revoke the session token used to authenticate this request
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    let response = AuthService::logout(
        &state.token_blacklist,
        &auth_user.token,
        auth_user.username(),
    )
    .await;
    Ok(Json(response))
}

/// Return the statically configured token, if any
#[instrument(skip(state))]
pub async fn fixed_token(State(state): State<AppState>) -> Json<FixedTokenResponse> {
    Json(FixedTokenResponse {
        token: state.jwt_config.fixed_token.clone(),
    })
}
