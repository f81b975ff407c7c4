//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;
use std::fmt;

/// Minimum accepted length of the token signing secret, in bytes.
pub const MIN_SECRET_KEY_LEN: usize = 32;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TOKEN_STORE_TIMEOUT_SECS: u64 = 100;

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Symmetric key used to sign and verify session tokens
    pub secret_key: String,

    /// Upper bound for a single token persistence call
    pub token_store_timeout_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &redact_database_url(&self.database_url))
            .field("secret_key", &"<redacted>")
            .field("token_store_timeout_secs", &self.token_store_timeout_secs)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

/// Replace the password in a connection URL's userinfo with `<redacted>`
fn redact_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);

    match authority.rsplit_once('@') {
        Some((userinfo, host)) => match userinfo.split_once(':') {
            Some((user, _)) => format!("{}://{}:<redacted>@{}{}", scheme, user, host, tail),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let secret_key =
            env::var("SECRET_KEY").map_err(|_| anyhow::anyhow!("SECRET_KEY is required"))?;
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            anyhow::bail!(
                "SECRET_KEY must be at least {} bytes long",
                MIN_SECRET_KEY_LEN
            );
        }

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            secret_key,
            token_store_timeout_secs: env::var("TOKEN_STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TOKEN_STORE_TIMEOUT_SECS),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "bistro=debug".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(config)
    }
}
