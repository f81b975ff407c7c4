//! User repository

use crate::domain::entities::{NewUser, User};
use bistro_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user; a duplicate email or phone maps to a conflict
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (user_id, first_name, last_name, email, phone,
                               avatar, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING user_id, first_name, last_name, email, phone,
                      avatar, password_hash, created_at, updated_at
            "#,
        )
        .bind(new_user.user_id)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.phone)
        .bind(&new_user.avatar)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(user)
    }

    /// Delete a user; returns whether a row was removed
    pub async fn delete(&self, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether an account already uses this email or phone number
    pub async fn email_or_phone_taken(&self, email: &str, phone: &str) -> Result<bool> {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users WHERE email = $1 OR phone = $2
            )
            "#,
        )
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT user_id, first_name, last_name, email, phone,
                   avatar, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT user_id, first_name, last_name, email, phone,
                   avatar, password_hash, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// One page of users, oldest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT user_id, first_name, last_name, email, phone,
                   avatar, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at ASC, user_id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
