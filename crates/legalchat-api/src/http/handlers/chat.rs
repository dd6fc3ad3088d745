//! Chat history HTTP handlers. All routes require a bearer token and only
//! ever touch the caller's own entries.
//!
//! Endpoints:
//! - POST   /api/chats      - Save a message/response pair
//! - GET    /api/chats      - List history, newest first (`limit`, `offset`)
//! - DELETE /api/chats/{id} - Delete one entry
//! - DELETE /api/chats      - Delete the whole history

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use legalchat_types::chat::{ChatEntry, NewChatEntry};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::handlers::auth::json_body;
use crate::state::AppState;

/// Query parameters for history listing.
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/chats - Save a message/response pair.
pub async fn save_chat(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<NewChatEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatEntry>), AppError> {
    let entry = json_body(payload)?;
    let saved = state
        .chat_service
        .save(user_id, &entry.message, &entry.response)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/chats - List history, newest first.
pub async fn list_chats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatEntry>>, AppError> {
    let entries = state
        .chat_service
        .history(user_id, query.limit, query.offset)
        .await?;
    Ok(Json(entries))
}

/// DELETE /api/chats/{id} - Delete one entry.
pub async fn delete_chat(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let entry_id: i64 = id
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid chat id: {id}")))?;
    state.chat_service.delete(user_id, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/chats - Delete the whole history.
pub async fn clear_chats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state.chat_service.clear(user_id).await?;
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
