//! User data model.
//!
//! The [`User`] struct doubles as the stored record and the request body
//! for create and update operations. Validation rules apply on the way in,
//! stored records are assumed valid.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user record.
///
/// `id` is chosen by the client on create and is the key for all lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: u32,
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: u32,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}
