//! JWT claims types

use serde::{Deserialize, Serialize};

/// Lifetime of an access token, in hours
pub const ACCESS_TOKEN_TTL_HOURS: i64 = 24;

/// Lifetime of a refresh token, in hours
pub const REFRESH_TOKEN_TTL_HOURS: i64 = 168;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Subject (account `user_id`)
    #[serde(rename = "sub")]
    pub subject_id: String,
    /// Expires at (Unix seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

/// Claims carried by a refresh token: expiration only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

/// Access and refresh tokens minted together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
