//! Identity attached to an authenticated request

use serde::Serialize;

use crate::claims::IdentityClaims;

/// Decoded identity of the caller, stored in request extensions by the auth gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub subject_id: String,
}

impl From<IdentityClaims> for RequestIdentity {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            subject_id: claims.subject_id,
        }
    }
}
