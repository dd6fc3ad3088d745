//! Application error type mapping to HTTP status codes and the error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use legalchat_types::error::{AuthError, ChatError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Registration, login and token failures.
    Auth(AuthError),
    /// Chat history failures.
    Chat(ChatError),
    /// Authenticated user no longer exists.
    UserNotFound,
    /// Malformed request (path or query parameters).
    Validation(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Auth(AuthError::EmailTaken) => (
                StatusCode::BAD_REQUEST,
                "EMAIL_TAKEN",
                "Email is already registered".to_string(),
            ),
            AppError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid email or password".to_string(),
            ),
            AppError::Auth(AuthError::MissingToken) => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "Missing bearer token".to_string(),
            ),
            AppError::Auth(AuthError::InvalidToken) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token".to_string(),
            ),
            AppError::Auth(AuthError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Chat(ChatError::InvalidEntry(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Chat(ChatError::NotFound) => (
                StatusCode::NOT_FOUND,
                "CHAT_NOT_FOUND",
                "Chat entry not found".to_string(),
            ),
            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "User not found".to_string())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Auth(AuthError::StoreUnavailable(_) | AuthError::Internal(_))
            | AppError::Chat(ChatError::StorageError(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        // Detail stays in the log; the client only sees the generic message.
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }],
            "meta": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
