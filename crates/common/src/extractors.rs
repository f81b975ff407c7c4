//! Custom axum extractors for Bistro

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Default page size for list endpoints
const DEFAULT_RECORDS_PER_PAGE: i64 = 10;

/// Maximum page size for list endpoints
const MAX_RECORDS_PER_PAGE: i64 = 100;

/// Pagination query parameters for list endpoints.
///
/// Values are kept as raw strings so that unparsable input falls back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default, rename = "recordPerPage")]
    pub record_per_page: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "startIndex")]
    pub start_index: Option<String>,
}

impl Pagination {
    /// Records per page, defaulting to 10 and capped at 100
    pub fn limit(&self) -> i64 {
        match parse_i64(self.record_per_page.as_deref()) {
            Some(n) if n >= 1 => n.min(MAX_RECORDS_PER_PAGE),
            _ => DEFAULT_RECORDS_PER_PAGE,
        }
    }

    /// One-based page number, defaulting to 1
    pub fn page(&self) -> i64 {
        match parse_i64(self.page.as_deref()) {
            Some(n) if n >= 1 => n,
            _ => 1,
        }
    }

    /// Offset of the first record; an explicit non-negative `startIndex` wins
    pub fn offset(&self) -> i64 {
        match parse_i64(self.start_index.as_deref()) {
            Some(n) if n >= 0 => n,
            _ => (self.page() - 1).saturating_mul(self.limit()),
        }
    }
}

fn parse_i64(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse().ok())
}

/// JSON extractor that validates the deserialized value automatically.
///
/// All input errors (deserialization + validation) return 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(|e| {
            ValidatedJsonRejection::Validation(Error::Validation(format!(
                "Validation failed: {}",
                e
            )))
        })?;
        Ok(ValidatedJson(value))
    }
}
