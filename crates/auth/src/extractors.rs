//! Axum extractors for authenticated handlers

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::context::RequestIdentity;
use crate::error::AuthError;

/// Identity attached by the auth gate.
///
/// Only meaningful on routes behind `require_token`; elsewhere it rejects
/// with `MissingCredential`.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub RequestIdentity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or(AuthError::MissingCredential)
    }
}
