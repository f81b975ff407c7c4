//! Auth gate middleware
//!
//! Installed with `axum::middleware::from_fn_with_state` on the protected
//! router only. Public routes (signup, login) are merged outside the layer.
//!
//! Clients send the access token in the `token` header, not in
//! `Authorization: Bearer`.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::context::RequestIdentity;
use crate::error::AuthError;
use crate::service::TokenService;

/// Request header carrying the access token
pub const TOKEN_HEADER: &str = "token";

/// Reject the request unless it carries a valid access token; otherwise
/// attach the caller's identity to the request extensions and continue.
pub async fn require_token(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = match extract_token(request.headers()).and_then(|t| tokens.validate_token(t)) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(
                method = %request.method(),
                path = %request.uri().path(),
                reason = %e,
                "Request rejected by auth gate"
            );
            return Err(e);
        }
    };

    let identity = RequestIdentity::from(claims);
    tracing::debug!(subject_id = %identity.subject_id, "Request authenticated");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Extract the token from the `token` header
pub(crate) fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(TOKEN_HEADER)
        .ok_or(AuthError::MissingCredential)?;

    let token = header.to_str().map_err(|_| AuthError::InvalidToken)?;
    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}
