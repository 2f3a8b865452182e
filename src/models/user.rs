use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// The identity of the logged in user, derived from the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's ID on the backend.
    pub user_id: UserId,
}

/// The logged in user's account as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's ID on the backend.
    pub user_id: UserId,
    /// The name the user logs in with.
    pub username: String,
}
