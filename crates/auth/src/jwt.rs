//! JWT signing and validation helpers

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;

use crate::claims::IdentityClaims;
use crate::error::AuthError;

/// Sign claims as an HS256 compact JWS
pub(crate) fn sign_claims<T: Serialize>(claims: &T, key: &EncodingKey) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::HS256), claims, key)
        .map_err(|e| AuthError::SigningFailure(e.to_string()))
}

/// Validate an access token against `now`.
///
/// Signature and structure are checked first; expiry is checked by hand so
/// that a token is expired exactly when `now >= exp`, with no leeway.
pub(crate) fn validate_identity_token(
    token: &str,
    key: &DecodingKey,
    now: DateTime<Utc>,
) -> Result<IdentityClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;

    let token_data = decode::<IdentityClaims>(token, key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    let claims = token_data.claims;
    if now.timestamp() >= claims.expires_at {
        tracing::debug!(subject_id = %claims.subject_id, "JWT expired");
        return Err(AuthError::ExpiredToken);
    }

    Ok(claims)
}
