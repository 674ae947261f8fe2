use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::User;
use super::service::UserService;

/// Create a user with a client-chosen id
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(user): ValidatedJson<User>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::create_user(&state.users, user).await?;
    let location = [(header::LOCATION, format!("/users/{}", user.id))];
    Ok((StatusCode::CREATED, location, Json(user)))
}

/// List all users ordered by id
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>, _auth_user: AuthUser) -> Json<Vec<User>> {
    Json(UserService::get_users(&state.users).await)
}

/// Fetch a single user by id
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<u32>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.users, id).await?;
    Ok(Json(user))
}

/// Replace the user record at the path id
#[instrument(skip(state))]
pub async fn update_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<u32>,
    ValidatedJson(user): ValidatedJson<User>,
) -> Result<StatusCode, AppError> {
    UserService::update_user(&state.users, id, user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the user record at the path id
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<u32>,
) -> Result<StatusCode, AppError> {
    UserService::delete_user(&state.users, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
