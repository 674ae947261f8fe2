use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{fixed_token, login, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/fixed-token", get(fixed_token))
}
