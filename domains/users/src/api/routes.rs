//! Route definitions for the users domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::UsersState;

/// Routes reachable without a token: registration and login
pub fn public_routes() -> Router<UsersState> {
    Router::new()
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
}

/// Routes that must sit behind the auth gate
pub fn protected_routes() -> Router<UsersState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{user_id}", get(users::get_user))
        .route("/auth/whoami", get(auth::whoami))
}
