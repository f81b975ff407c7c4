//! Token service: issues, validates, and persists session token pairs
//!
//! Holds the signing keys (immutable after construction) and the injected
//! token store. Cloning is cheap; every request handler shares one instance.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::claims::{
    IdentityClaims, RefreshClaims, TokenPair, ACCESS_TOKEN_TTL_HOURS, REFRESH_TOKEN_TTL_HOURS,
};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{sign_claims, validate_identity_token};
use crate::store::TokenStore;

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<SigningKeys>,
    store: Arc<dyn TokenStore>,
    store_timeout: Duration,
}

impl TokenService {
    /// Build the service and sign a probe token so that a broken key fails
    /// at startup rather than on the first login.
    pub fn new(config: &AuthConfig, store: Arc<dyn TokenStore>) -> Result<Self, AuthError> {
        let keys = SigningKeys {
            encoding: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret_key.as_bytes()),
        };

        sign_claims(&RefreshClaims { expires_at: 0 }, &keys.encoding)?;

        Ok(Self {
            keys: Arc::new(keys),
            store,
            store_timeout: config.store_timeout,
        })
    }

    pub fn issue_token_pair(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        subject_id: &str,
    ) -> Result<TokenPair, AuthError> {
        self.issue_token_pair_at(email, first_name, last_name, subject_id, Utc::now())
    }

    /// Issue a pair as if the current time were `now`
    pub fn issue_token_pair_at(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        subject_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, AuthError> {
        let claims = IdentityClaims {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            subject_id: subject_id.to_string(),
            expires_at: (now + chrono::Duration::hours(ACCESS_TOKEN_TTL_HOURS)).timestamp(),
        };
        let refresh_claims = RefreshClaims {
            expires_at: (now + chrono::Duration::hours(REFRESH_TOKEN_TTL_HOURS)).timestamp(),
        };

        let access_token = sign_claims(&claims, &self.keys.encoding)?;
        let refresh_token = sign_claims(&refresh_claims, &self.keys.encoding)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Validate as if the current time were `now`
    pub fn validate_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<IdentityClaims, AuthError> {
        validate_identity_token(token, &self.keys.decoding, now)
    }

    /// Store the pair as the subject's latest tokens.
    ///
    /// Bounded by the configured store timeout; a timeout or store error is
    /// returned as `PersistenceFailure` and never retried.
    pub async fn persist_token_pair(
        &self,
        access_token: &str,
        refresh_token: &str,
        subject_id: &str,
    ) -> Result<(), AuthError> {
        let write = self
            .store
            .upsert_tokens(subject_id, access_token, refresh_token, Utc::now());

        match tokio::time::timeout(self.store_timeout, write).await {
            Ok(Ok(())) => {
                tracing::debug!(subject_id = %subject_id, "Token pair persisted");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, subject_id = %subject_id, "Failed to persist token pair");
                Err(AuthError::PersistenceFailure(e.to_string()))
            }
            Err(_) => {
                tracing::error!(
                    subject_id = %subject_id,
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "Token pair persistence timed out"
                );
                Err(AuthError::PersistenceFailure(format!(
                    "timed out after {:?}",
                    self.store_timeout
                )))
            }
        }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }
}
