//! Chat service: persistence and retrieval of a user's chat history.

use legalchat_types::chat::ChatEntry;
use legalchat_types::error::{ChatError, RepositoryError};
use legalchat_types::user::UserId;
use tracing::info;

use crate::chat::repository::ChatRepository;

/// Page size when the caller does not ask for one.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
/// Upper bound on a single history page.
pub const MAX_HISTORY_LIMIT: i64 = 200;

/// Saves and lists message/response pairs for an authenticated user.
pub struct ChatService<C: ChatRepository> {
    chat_repo: C,
}

impl<C: ChatRepository> ChatService<C> {
    pub fn new(chat_repo: C) -> Self {
        Self { chat_repo }
    }

    /// Store a message and the answer produced for it.
    pub async fn save(
        &self,
        user_id: UserId,
        message: &str,
        response: &str,
    ) -> Result<ChatEntry, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::InvalidEntry("message must not be empty".to_string()));
        }

        let entry = self
            .chat_repo
            .create(user_id, message, response)
            .await
            .map_err(storage)?;

        info!(user_id = %user_id, entry_id = entry.id, "Chat entry saved");
        Ok(entry)
    }

    /// A page of the user's history, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and is clamped to
    /// `1..=MAX_HISTORY_LIMIT`; negative offsets are treated as zero.
    pub async fn history(
        &self,
        user_id: UserId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ChatEntry>, ChatError> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        self.chat_repo
            .list_for_user(user_id, limit, offset)
            .await
            .map_err(storage)
    }

    /// Delete one of the user's entries.
    ///
    /// An entry owned by someone else is reported as `NotFound`, same as a
    /// missing one.
    pub async fn delete(&self, user_id: UserId, entry_id: i64) -> Result<(), ChatError> {
        let removed = self
            .chat_repo
            .delete(user_id, entry_id)
            .await
            .map_err(storage)?;
        if !removed {
            return Err(ChatError::NotFound);
        }
        info!(user_id = %user_id, entry_id, "Chat entry deleted");
        Ok(())
    }

    /// Delete the user's whole history. Returns how many entries were removed.
    pub async fn clear(&self, user_id: UserId) -> Result<u64, ChatError> {
        let removed = self.chat_repo.clear(user_id).await.map_err(storage)?;
        info!(user_id = %user_id, removed, "Chat history cleared");
        Ok(removed)
    }
}

fn storage(e: RepositoryError) -> ChatError {
    ChatError::StorageError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockChatRepository {
        entries: Mutex<Vec<ChatEntry>>,
        last_page: Mutex<Option<(i64, i64)>>,
    }

    impl ChatRepository for MockChatRepository {
        async fn create(
            &self,
            user_id: UserId,
            message: &str,
            response: &str,
        ) -> Result<ChatEntry, RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            let entry = ChatEntry {
                id: entries.len() as i64 + 1,
                user_id,
                message: message.to_string(),
                response: response.to_string(),
                created_at: Utc::now(),
            };
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn list_for_user(
            &self,
            user_id: UserId,
            limit: i64,
            offset: i64,
        ) -> Result<Vec<ChatEntry>, RepositoryError> {
            *self.last_page.lock().unwrap() = Some((limit, offset));
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .rev()
                .filter(|e| e.user_id == user_id)
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn delete(&self, user_id: UserId, entry_id: i64) -> Result<bool, RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| !(e.id == entry_id && e.user_id == user_id));
            Ok(entries.len() < before)
        }

        async fn clear(&self, user_id: UserId) -> Result<u64, RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.user_id != user_id);
            Ok((before - entries.len()) as u64)
        }
    }

    fn service() -> ChatService<MockChatRepository> {
        ChatService::new(MockChatRepository::default())
    }

    #[tokio::test]
    async fn test_save_and_history_newest_first() {
        let svc = service();
        svc.save(UserId(1), "first", "a1").await.unwrap();
        svc.save(UserId(1), "second", "a2").await.unwrap();

        let history = svc.history(UserId(1), None, None).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "second");
        assert_eq!(history[1].message, "first");
    }

    #[tokio::test]
    async fn test_save_rejects_blank_message() {
        let svc = service();
        let err = svc.save(UserId(1), "   ", "answer").await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidEntry(_)));
    }

    #[tokio::test]
    async fn test_history_is_scoped_to_user() {
        let svc = service();
        svc.save(UserId(1), "mine", "a").await.unwrap();
        svc.save(UserId(2), "theirs", "b").await.unwrap();

        let history = svc.history(UserId(2), None, None).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].message, "theirs");
    }

    #[tokio::test]
    async fn test_history_clamps_paging() {
        let svc = service();
        svc.history(UserId(1), Some(10_000), Some(-5)).await.unwrap();
        assert_eq!(
            *svc.chat_repo.last_page.lock().unwrap(),
            Some((MAX_HISTORY_LIMIT, 0))
        );

        svc.history(UserId(1), Some(0), None).await.unwrap();
        assert_eq!(*svc.chat_repo.last_page.lock().unwrap(), Some((1, 0)));

        svc.history(UserId(1), None, Some(3)).await.unwrap();
        assert_eq!(
            *svc.chat_repo.last_page.lock().unwrap(),
            Some((DEFAULT_HISTORY_LIMIT, 3))
        );
    }

    #[tokio::test]
    async fn test_delete_other_users_entry_is_not_found() {
        let svc = service();
        let entry = svc.save(UserId(1), "mine", "a").await.unwrap();

        let err = svc.delete(UserId(2), entry.id).await.unwrap_err();
        assert!(matches!(err, ChatError::NotFound));

        svc.delete(UserId(1), entry.id).await.unwrap();
        assert!(svc.history(UserId(1), None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_counts_removed_entries() {
        let svc = service();
        svc.save(UserId(1), "q1", "a1").await.unwrap();
        svc.save(UserId(1), "q2", "a2").await.unwrap();
        svc.save(UserId(2), "q3", "a3").await.unwrap();

        assert_eq!(svc.clear(UserId(1)).await.unwrap(), 2);
        assert_eq!(svc.history(UserId(2), None, None).await.unwrap().len(), 1);
    }
}
