//! Signup, login and user lookup against a live database

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use bistro_auth::mock::MockTokenStore;
use serde_json::json;
use serial_test::serial;

use crate::common::{get_with_token, post_json, signup_body, TestApp};

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_signup_issues_and_persists_token_pair() {
    let app = TestApp::new().await.unwrap();

    let body = app.signup().await;
    let user_id = body["user_id"].as_str().unwrap().to_string();
    let token = body["token"].as_str().unwrap();

    assert!(!body["refresh_token"].as_str().unwrap().is_empty());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    assert_eq!(app.token_record_count(&user_id).await.unwrap(), 1);
    assert_eq!(
        app.stored_access_token(&user_id).await.unwrap().as_deref(),
        Some(token)
    );

    // The issued access token opens the gate and carries the new account
    let (status, whoami) = app
        .send(get_with_token("/auth/whoami", Some(token)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(whoami["subject_id"], user_id);
    assert_eq!(whoami["email"], body["email"]);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_signup_conflicts() {
    let app = TestApp::new().await.unwrap();
    let first = app.signup().await;

    let (status, body) = app
        .send(post_json(
            "/users/signup",
            json!({
                "first_name": "Other",
                "last_name": "Person",
                "password": "correct-horse",
                "email": first["email"],
                "phone": "+19999999999",
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "error": "this email or phone number already exists" })
    );

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_login_overwrites_single_token_record() {
    let app = TestApp::new().await.unwrap();
    let signup = app.signup().await;
    let user_id = signup["user_id"].as_str().unwrap().to_string();

    let (status, login) = app
        .send(post_json(
            "/users/login",
            json!({ "email": signup["email"], "password": "correct-horse" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["user_id"], signup["user_id"]);
    assert_eq!(app.token_record_count(&user_id).await.unwrap(), 1);
    assert_eq!(
        app.stored_access_token(&user_id).await.unwrap().as_deref(),
        login["token"].as_str()
    );

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await.unwrap();
    let signup = app.signup().await;

    let attempts = [
        json!({ "email": signup["email"], "password": "wrong-horse" }),
        json!({ "email": "nobody@bistro.test", "password": "correct-horse" }),
    ];

    for attempt in attempts {
        let (status, body) = app.send(post_json("/users/login", attempt)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "login or password is incorrect" }));
    }

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_list_and_get_users() {
    let app = TestApp::new().await.unwrap();
    let first = app.signup().await;
    let second = app.signup().await;
    let token = second["token"].as_str().unwrap();

    let (status, page) = app
        .send(get_with_token("/users?recordPerPage=1&page=2", Some(token)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_count"], 2);
    assert_eq!(page["user_items"].as_array().unwrap().len(), 1);

    let uri = format!("/users/{}", first["user_id"].as_str().unwrap());
    let (status, user) = app.send(get_with_token(&uri, Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], first["email"]);

    let (status, _) = app
        .send(get_with_token(
            "/users/00000000-0000-0000-0000-000000000000",
            Some(token),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires PostgreSQL"]
async fn test_signup_is_retryable_after_token_store_failure() {
    let failing = TestApp::with_token_store(Arc::new(MockTokenStore::failing()))
        .await
        .unwrap();
    let body = signup_body();

    let (status, error) = failing.send(post_json("/users/signup", body.clone())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error, json!({ "error": "internal server error" }));
    assert_eq!(failing.user_count().await.unwrap(), 0);

    // Same payload against a healthy token store is accepted, not a conflict
    let app = TestApp::new().await.unwrap();
    let (status, created) = app.send(post_json("/users/signup", body.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "retry failed: {}", created);
    assert_eq!(created["email"], body["email"]);

    app.cleanup().await.unwrap();
}
