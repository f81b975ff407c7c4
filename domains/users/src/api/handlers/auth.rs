//! Auth introspection API handler
//!
//! Implements:
//! - GET /auth/whoami — Return the identity attached by the auth gate

use axum::Json;
use bistro_auth::{CurrentIdentity, RequestIdentity};

/// GET /auth/whoami — Return the identity attached by the auth gate
pub async fn whoami(CurrentIdentity(identity): CurrentIdentity) -> Json<RequestIdentity> {
    Json(identity)
}
