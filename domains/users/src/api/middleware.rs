//! Users domain state and token service integration

use crate::UsersRepositories;
use axum::extract::FromRef;
use bistro_auth::TokenService;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
    pub tokens: TokenService,
}

impl FromRef<UsersState> for TokenService {
    fn from_ref(state: &UsersState) -> Self {
        state.tokens.clone()
    }
}
