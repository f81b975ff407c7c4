//! Auth gate integration tests
//!
//! Drives the fully composed router with tokens minted outside the service:
//! expired, foreign-key, refresh-shaped and well-formed. None of these requests
//! reach the database, so the pool is created lazily and never connects.

mod common;

use axum::http::StatusCode;
use bistro_auth::{IdentityClaims, RefreshClaims};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;

use crate::common::{get_with_token, test_config, TestApp, TEST_SECRET_KEY};

fn offline_app() -> TestApp {
    let config = test_config();
    let pool = PgPool::connect_lazy(&config.database_url).unwrap();
    TestApp {
        router: bistro_app::create_app(&config, pool.clone()).unwrap(),
        pool,
        config,
    }
}

fn sign<T: Serialize>(claims: &T, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn identity(expires_at: i64) -> IdentityClaims {
    IdentityClaims {
        email: "grace@bistro.test".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        subject_id: "subject-42".to_string(),
        expires_at,
    }
}

#[tokio::test]
async fn test_valid_token_exposes_identity() {
    let app = offline_app();
    let token = sign(
        &identity((Utc::now() + Duration::hours(1)).timestamp()),
        TEST_SECRET_KEY,
    );

    let (status, body) = app
        .send(get_with_token("/auth/whoami", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "email": "grace@bistro.test",
            "first_name": "Grace",
            "last_name": "Hopper",
            "subject_id": "subject-42",
        })
    );
}

#[tokio::test]
async fn test_missing_token_header() {
    let app = offline_app();

    let (status, body) = app.send(get_with_token("/auth/whoami", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "No Authorization header provided" }));
}

#[tokio::test]
async fn test_expired_token() {
    let app = offline_app();
    let token = sign(
        &identity((Utc::now() - Duration::minutes(1)).timestamp()),
        TEST_SECRET_KEY,
    );

    let (status, body) = app
        .send(get_with_token("/auth/whoami", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "token is expired" }));
}

#[tokio::test]
async fn test_token_signed_with_other_key() {
    let app = offline_app();
    let token = sign(
        &identity((Utc::now() + Duration::hours(1)).timestamp()),
        "some-other-secret-key-that-is-long-enough",
    );

    let (status, body) = app
        .send(get_with_token("/auth/whoami", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "the token is invalid" }));
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = offline_app();
    let refresh = sign(
        &RefreshClaims {
            expires_at: (Utc::now() + Duration::hours(1)).timestamp(),
        },
        TEST_SECRET_KEY,
    );

    let (status, body) = app
        .send(get_with_token("/users", Some(&refresh)))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "the token is invalid" }));
}

#[tokio::test]
async fn test_garbage_token() {
    let app = offline_app();

    for token in ["garbage", "a.b.c", "Bearer x.y.z"] {
        let (status, body) = app
            .send(get_with_token("/users/anything", Some(token)))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", token);
        assert_eq!(body, json!({ "error": "the token is invalid" }));
    }
}
