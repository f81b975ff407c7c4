//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No Authorization header provided")]
    MissingCredential,

    #[error("the token is invalid")]
    InvalidToken,

    #[error("token is expired")]
    ExpiredToken,

    #[error("failed to persist tokens: {0}")]
    PersistenceFailure(String),

    #[error("failed to sign token: {0}")]
    SigningFailure(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential | AuthError::InvalidToken | AuthError::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::PersistenceFailure(_) | AuthError::SigningFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Reason string placed in the `error` field of the response body
    pub fn reason(&self) -> String {
        match self {
            AuthError::PersistenceFailure(_) => "failed to persist tokens".to_string(),
            AuthError::SigningFailure(_) => "failed to sign token".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Token service failure");
        }

        let body = Json(json!({ "error": self.reason() }));

        (status, body).into_response()
    }
}

impl From<AuthError> for bistro_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential | AuthError::InvalidToken | AuthError::ExpiredToken => {
                bistro_common::Error::Authentication(err.reason())
            }
            AuthError::PersistenceFailure(_) | AuthError::SigningFailure(_) => {
                bistro_common::Error::Internal(err.to_string())
            }
        }
    }
}
