//! Account HTTP handlers.
//!
//! Endpoints:
//! - POST /api/register - Create an account
//! - POST /api/login    - Exchange credentials for a session token
//! - GET  /api/me       - Profile of the authenticated user

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use legalchat_types::user::{Credentials, LoginOutcome, RegisteredUser, UserProfile};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

/// Unwrap a JSON body, turning decoder rejections into a validation error.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// POST /api/register - Create an account.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let creds = json_body(payload)?;
    let user = state
        .auth_service
        .register(&creds.email, &creds.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/login - Exchange credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<LoginOutcome>, AppError> {
    let creds = json_body(payload)?;
    let outcome = state.auth_service.login(&creds.email, &creds.password).await?;
    Ok(Json(outcome))
}

/// GET /api/me - Profile of the authenticated user.
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    state
        .auth_service
        .profile(user_id)
        .await?
        .map(Json)
        .ok_or(AppError::UserNotFound)
}
