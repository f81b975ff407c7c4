//! Bistro application composition root
//!
//! Composes the public and token-protected routers into a single application.

use std::sync::Arc;

use axum::{extract::FromRef, middleware, Router};
use bistro_auth::{require_token, AuthConfig, PgTokenStore, TokenService};
use bistro_common::Config;
use bistro_users::{UsersRepositories, UsersState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::from_config(config)?;
    let token_store = Arc::new(PgTokenStore::new(pool.clone()));
    let tokens = TokenService::new(&auth_config, token_store)?;

    let state = UsersState {
        repos: UsersRepositories::new(pool),
        tokens,
    };

    Ok(build_router(state))
}

/// Assemble routes around an already-built state.
///
/// Everything merged into `protected` runs behind the auth gate; signup and
/// login are merged outside it.
pub fn build_router(state: UsersState) -> Router {
    let gate = middleware::from_fn_with_state(TokenService::from_ref(&state), require_token);

    let protected = Router::new()
        .merge(bistro_users::protected_routes())
        .route_layer(gate);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Bistro API v0.1.0" }))
        .merge(bistro_users::public_routes())
        .merge(protected)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
