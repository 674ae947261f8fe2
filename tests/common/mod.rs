use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rollcall::config::cors::CorsConfig;
use rollcall::config::jwt::JwtConfig;
use rollcall::modules::auth::blacklist::TokenBlacklist;
use rollcall::modules::users::model::User;
use rollcall::modules::users::store::UserStore;
use rollcall::router::init_router;
use rollcall::state::AppState;
use tower::ServiceExt;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "integration-test-secret";

/// State seeded with the same starter users the server boots with.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState {
        jwt_config: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 3600,
            fixed_token: Some("shared-diagnostic-token".to_string()),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        users: Arc::new(UserStore::with_users([
            User {
                id: 1,
                name: "Alice".to_string(),
                age: 30,
                email: "alice@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                age: 25,
                email: "bob@example.com".to_string(),
            },
        ])),
        token_blacklist: Arc::new(TokenBlacklist::new()),
    }
}

#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    init_router(test_state())
}

/// Logs in through the real endpoint and returns the issued token.
#[allow(dead_code)]
pub async fn login(app: &Router, username: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/login?username={username}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["token"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
