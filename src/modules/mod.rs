pub mod auth;
pub mod users;

pub use self::auth::model::LoginResponse;
pub use self::users::model::User;
