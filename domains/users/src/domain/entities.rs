//! Domain entities for the users domain

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered account.
///
/// `user_id` is the subject carried in session tokens.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Subject id used in token claims and the token store
    pub fn subject_id(&self) -> String {
        self.user_id.to_string()
    }
}

/// Fields required to insert a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub password_hash: String,
}
