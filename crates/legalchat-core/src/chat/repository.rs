//! ChatRepository trait definition.
//!
//! Every operation is scoped to a user id: entries of one user are invisible
//! to every other user at the storage layer.

use legalchat_types::chat::ChatEntry;
use legalchat_types::error::RepositoryError;
use legalchat_types::user::UserId;

/// Repository trait for chat history persistence.
///
/// Implementations live in legalchat-infra (e.g., `SqliteChatRepository`).
pub trait ChatRepository: Send + Sync {
    /// Store a message/response pair for a user.
    fn create(
        &self,
        user_id: UserId,
        message: &str,
        response: &str,
    ) -> impl std::future::Future<Output = Result<ChatEntry, RepositoryError>> + Send;

    /// List a user's entries, newest first.
    fn list_for_user(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatEntry>, RepositoryError>> + Send;

    /// Delete one entry if it belongs to the user. Returns whether a row was removed.
    fn delete(
        &self,
        user_id: UserId,
        entry_id: i64,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Delete all entries of a user. Returns the number removed.
    fn clear(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
