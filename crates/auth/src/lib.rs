//! Session authentication for the Bistro API
//!
//! Provides the token service (JWT issuance, validation, persistence), the
//! auth gate middleware that protects routes, and the extractor handlers use
//! to read the authenticated identity.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod gate;
mod jwt;
pub mod mock;
mod service;
mod store;

pub use claims::{
    IdentityClaims, RefreshClaims, TokenPair, ACCESS_TOKEN_TTL_HOURS, REFRESH_TOKEN_TTL_HOURS,
};
pub use config::AuthConfig;
pub use context::RequestIdentity;
pub use error::AuthError;
pub use extractors::CurrentIdentity;
pub use gate::{require_token, TOKEN_HEADER};
pub use service::TokenService;
pub use store::{PgTokenStore, TokenRecord, TokenStore};
