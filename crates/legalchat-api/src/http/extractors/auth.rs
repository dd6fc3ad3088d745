//! Bearer token authentication extractor.
//!
//! Reads `Authorization: Bearer <token>` and resolves it to a user id through
//! [`AuthService::authenticate`](legalchat_core::auth::service::AuthService::authenticate).
//! A missing header, a non-bearer scheme, or an undecodable header value all
//! count as no token at all.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use legalchat_types::user::UserId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated caller. Extracting this validates the session token.
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts);
        let user_id = state.auth_service.authenticate(token)?;
        Ok(AuthUser(user_id))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
