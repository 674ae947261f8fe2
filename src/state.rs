use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::auth::blacklist::TokenBlacklist;
use crate::modules::users::model::User;
use crate::modules::users::store::UserStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub users: Arc<UserStore>,
    pub token_blacklist: Arc<TokenBlacklist>,
}

pub fn init_app_state() -> AppState {
    // Starter records so the API is usable right after boot
    let users = UserStore::with_users([
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
    ]);

    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        users: Arc::new(users),
        token_blacklist: Arc::new(TokenBlacklist::new()),
    }
}
