//! User account API handlers
//!
//! Implements:
//! - POST /users/signup - Register and receive a token pair (public)
//! - POST /users/login - Authenticate and receive a fresh token pair (public)
//! - GET /users - Paginated user listing
//! - GET /users/{user_id} - Single user lookup

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bistro_auth::AuthError;
use bistro_common::{Error, Pagination, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::domain::entities::{NewUser, User};
use crate::domain::password::{dummy_hash, hash_password, verify_password};

const DUPLICATE_ACCOUNT: &str = "this email or phone number already exists";
const BAD_CREDENTIALS: &str = "login or password is incorrect";

/// Public view of a user; never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response for signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub total_count: i64,
    pub user_items: Vec<UserResponse>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100))]
    pub first_name: String,

    #[validate(length(min = 2, max = 100))]
    pub last_name: String,

    #[serde(alias = "Password")]
    #[validate(length(min = 6))]
    pub password: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    #[validate(length(max = 2048))]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[serde(alias = "Password")]
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /users/signup - Register a new account
pub async fn signup(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let users = &state.repos.users;

    if users
        .email_or_phone_taken(&request.email, &request.phone)
        .await?
    {
        return Err(Error::Conflict(DUPLICATE_ACCOUNT.to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = users
        .create(NewUser {
            user_id: Uuid::new_v4(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            avatar: request.avatar,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict(DUPLICATE_ACCOUNT.to_string()),
            other => other,
        })?;

    let subject_id = user.subject_id();
    let issued = async {
        let pair = state.tokens.issue_token_pair(
            &user.email,
            &user.first_name,
            &user.last_name,
            &subject_id,
        )?;
        state
            .tokens
            .persist_token_pair(&pair.access_token, &pair.refresh_token, &subject_id)
            .await?;
        Ok::<_, AuthError>(pair)
    }
    .await;

    let pair = match issued {
        Ok(pair) => pair,
        Err(e) => {
            // Remove the account so the same signup can be retried
            if let Err(cleanup) = users.delete(user.user_id).await {
                tracing::error!(
                    user_id = %user.user_id,
                    error = %cleanup,
                    "Failed to roll back user after token issuance failure"
                );
            }
            return Err(e.into());
        }
    };

    tracing::info!(user_id = %user.user_id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserResponse::from(user),
            token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
    ))
}

/// POST /users/login - Verify credentials and issue a fresh token pair
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let Some(user) = state.repos.users.find_by_email(&request.email).await? else {
        let _ = verify_password(dummy_hash(), &request.password);
        return Err(Error::Authentication(BAD_CREDENTIALS.to_string()));
    };

    if !verify_password(&user.password_hash, &request.password) {
        tracing::info!(user_id = %user.user_id, "Login rejected: wrong password");
        return Err(Error::Authentication(BAD_CREDENTIALS.to_string()));
    }

    let subject_id = user.subject_id();
    let pair =
        state
            .tokens
            .issue_token_pair(&user.email, &user.first_name, &user.last_name, &subject_id)?;
    state
        .tokens
        .persist_token_pair(&pair.access_token, &pair.refresh_token, &subject_id)
        .await?;

    tracing::info!(user_id = %user.user_id, "User logged in");

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// GET /users - List users page by page
pub async fn list_users(
    State(state): State<UsersState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<UserListResponse>> {
    let users = &state.repos.users;

    let total_count = users.count().await?;
    let page = users.list(pagination.offset(), pagination.limit()).await?;

    Ok(Json(UserListResponse {
        total_count,
        user_items: page.into_iter().map(UserResponse::from).collect(),
    }))
}

/// GET /users/{user_id} - Look up a single user
pub async fn get_user(
    State(state): State<UsersState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>> {
    let not_found = || Error::NotFound("User not found".to_string());

    let user_id = Uuid::parse_str(&user_id).map_err(|_| not_found())?;
    let user = state
        .repos
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(UserResponse::from(user)))
}
