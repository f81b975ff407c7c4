//! Token record persistence
//!
//! The latest issued pair is kept per subject. `PgTokenStore` uses runtime
//! `sqlx::query` calls against the `user_tokens` table.

use bistro_common::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Latest token pair stored for a subject
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TokenRecord {
    pub user_id: String,
    pub token: String,
    pub refresh_token: String,
    pub updated_at: DateTime<Utc>,
}

/// Persistence collaborator for token pairs
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Create or overwrite the record for `subject_id`
    async fn upsert_tokens(
        &self,
        subject_id: &str,
        access_token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    async fn find_by_subject_id(
        &self,
        subject_id: &str,
    ) -> Result<Option<TokenRecord>, RepositoryError>;
}

/// Postgres-backed token store
#[derive(Clone)]
pub struct PgTokenStore {
    pool: PgPool,
}

impl PgTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TokenStore for PgTokenStore {
    async fn upsert_tokens(
        &self,
        subject_id: &str,
        access_token: &str,
        refresh_token: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO user_tokens (user_id, token, refresh_token, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                token = EXCLUDED.token,
                refresh_token = EXCLUDED.refresh_token,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(subject_id)
        .bind(access_token)
        .bind(refresh_token)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_subject_id(
        &self,
        subject_id: &str,
    ) -> Result<Option<TokenRecord>, RepositoryError> {
        let record: Option<TokenRecord> = sqlx::query_as(
            r#"
            SELECT user_id, token, refresh_token, updated_at
            FROM user_tokens
            WHERE user_id = $1
            "#,
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
