//! Authentication configuration

use std::fmt;
use std::time::Duration;

use bistro_common::config::{Config, MIN_SECRET_KEY_LEN};

use crate::error::AuthError;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub store_timeout: Duration,
}

impl AuthConfig {
    /// Build a config, refusing secrets that are too short to sign with.
    pub fn new(secret_key: impl Into<String>, store_timeout: Duration) -> Result<Self, AuthError> {
        let secret_key = secret_key.into();
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(AuthError::SigningFailure(format!(
                "signing key must be at least {} bytes",
                MIN_SECRET_KEY_LEN
            )));
        }

        Ok(Self {
            secret_key,
            store_timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AuthError> {
        Self::new(
            config.secret_key.clone(),
            Duration::from_secs(config.token_store_timeout_secs),
        )
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"<redacted>")
            .field("store_timeout", &self.store_timeout)
            .finish()
    }
}
