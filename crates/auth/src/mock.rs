//! In-memory token store for tests and local tooling
//!
//! Keeps one record per subject, like the database store, and can be told
//! to stall or fail so callers can exercise their error paths.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bistro_common::RepositoryError;
use chrono::{DateTime, Utc};

use crate::store::{TokenRecord, TokenStore};

#[derive(Debug, Clone, Default)]
pub struct MockTokenStore {
    records: Arc<Mutex<HashMap<String, TokenRecord>>>,
    delay: Option<Duration>,
    fail_writes: bool,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write sleeps for `delay` before touching the map
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every write fails with a connection error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TokenStore for MockTokenStore {
    async fn upsert_tokens(
        &self,
        subject_id: &str,
        access_token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_writes {
            return Err(RepositoryError::Connection(sqlx::Error::PoolTimedOut));
        }

        self.records.lock().unwrap().insert(
            subject_id.to_string(),
            TokenRecord {
                user_id: subject_id.to_string(),
                token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
                updated_at,
            },
        );

        Ok(())
    }

    async fn find_by_subject_id(
        &self,
        subject_id: &str,
    ) -> Result<Option<TokenRecord>, RepositoryError> {
        Ok(self.records.lock().unwrap().get(subject_id).cloned())
    }
}
