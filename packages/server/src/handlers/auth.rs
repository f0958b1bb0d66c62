use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::auth::{
    LoginRequest, LoginResponse, RegisterRequest, UserResponse, validate_login_request,
    validate_register_request,
};
use crate::state::AppState;
use crate::utils::{hash, jwt};

#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    operation_id = "register",
    summary = "Register a new user",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error or username taken (VALIDATION_ERROR, USERNAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_register_request(&payload)?;

    let username = payload.username.trim().to_string();
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    // Hashing is deliberately slow; keep it off the async workers so it
    // cannot stall unrelated requests.
    let password = payload.password;
    let password_hash = tokio::task::spawn_blocking(move || hash::hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task failed: {e}")))?
        .map_err(|e| AppError::Internal(format!("Password hash error: {e}")))?;

    let new_user = user::ActiveModel {
        username: Set(username),
        name: Set(name),
        password_hash: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    // The unique constraint on username is the single source of truth for
    // duplicates; a lost insert race still surfaces as one conflict.
    let user = new_user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Registration race condition: unique constraint caught on insert");
            AppError::UsernameTaken
        }
        _ => AppError::from(e),
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Exchange credentials for a bearer token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unknown user or wrong password (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validate_login_request(&payload)?;

    let username = payload.username.trim();

    let user = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password = payload.password;
    let stored_hash = user.password_hash.clone();
    let is_valid =
        tokio::task::spawn_blocking(move || hash::verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Hash task failed: {e}")))?;

    // Uniform failure for unknown user and wrong password.
    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::sign(user.id, &user.username, &state.config.auth.jwt_secret)
        .map_err(|e| AppError::Internal(format!("Token sign error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "me",
    summary = "Return the current authenticated user's info",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID, USER_NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(auth_user), fields(user_id = auth_user.user_id))]
pub async fn me(auth_user: AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: auth_user.user_id,
        username: auth_user.username,
        name: auth_user.name,
    })
}
