//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `legalchat-core` using sqlx with split read/write pools.
//! Follows the same patterns as `SqliteUserRepository`: raw queries, a private Row struct,
//! split reader/writer pool usage.

use chrono::Utc;
use legalchat_core::chat::repository::ChatRepository;
use legalchat_types::chat::ChatEntry;
use legalchat_types::error::RepositoryError;
use legalchat_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::user::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatEntry.
struct ChatEntryRow {
    id: i64,
    user_id: i64,
    message: String,
    response: String,
    created_at: String,
}

impl ChatEntryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            message: row.try_get("message")?,
            response: row.try_get("response")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_entry(self) -> Result<ChatEntry, RepositoryError> {
        Ok(ChatEntry {
            id: self.id,
            user_id: UserId(self.user_id),
            message: self.message,
            response: self.response,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn create(
        &self,
        user_id: UserId,
        message: &str,
        response: &str,
    ) -> Result<ChatEntry, RepositoryError> {
        let created_at = Utc::now();

        let done = sqlx::query(
            "INSERT INTO chats (user_id, message, response, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id.0)
        .bind(message)
        .bind(response)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(ChatEntry {
            id: done.last_insert_rowid(),
            user_id,
            message: message.to_string(),
            response: response.to_string(),
            created_at,
        })
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatEntry>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_id, message, response, created_at FROM chats
             WHERE user_id = ?
             ORDER BY id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(user_id.0)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let entry_row =
                ChatEntryRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            entries.push(entry_row.into_entry()?);
        }

        Ok(entries)
    }

    async fn delete(&self, user_id: UserId, entry_id: i64) -> Result<bool, RepositoryError> {
        let done = sqlx::query("DELETE FROM chats WHERE id = ? AND user_id = ?")
            .bind(entry_id)
            .bind(user_id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(done.rows_affected() > 0)
    }

    async fn clear(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let done = sqlx::query("DELETE FROM chats WHERE user_id = ?")
            .bind(user_id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(done.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::user::SqliteUserRepository;
    use legalchat_core::repository::user::UserRepository;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url, 4).await.unwrap()
    }

    async fn seed_user(pool: &DatabasePool, email: &str) -> UserId {
        SqliteUserRepository::new(pool.clone())
            .create(email, "hash")
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "a@x.com").await;
        let repo = SqliteChatRepository::new(pool);

        repo.create(user, "What is bail?", "Bail is...").await.unwrap();
        repo.create(user, "And anticipatory bail?", "It is...").await.unwrap();

        let entries = repo.list_for_user(user, 50, 0).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "And anticipatory bail?");
        assert_eq!(entries[1].response, "Bail is...");
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_paged() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice@x.com").await;
        let bob = seed_user(&pool, "bob@x.com").await;
        let repo = SqliteChatRepository::new(pool);

        for i in 0..5 {
            repo.create(alice, &format!("q{i}"), "a").await.unwrap();
        }
        repo.create(bob, "bob's question", "a").await.unwrap();

        let page = repo.list_for_user(alice, 2, 1).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].message, "q3");
        assert_eq!(page[1].message, "q2");
        assert!(page.iter().all(|e| e.user_id == alice));

        let bobs = repo.list_for_user(bob, 50, 0).await.unwrap();
        assert_eq!(bobs.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_requires_ownership() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice@x.com").await;
        let bob = seed_user(&pool, "bob@x.com").await;
        let repo = SqliteChatRepository::new(pool);

        let entry = repo.create(alice, "q", "a").await.unwrap();

        assert!(!repo.delete(bob, entry.id).await.unwrap());
        assert_eq!(repo.list_for_user(alice, 50, 0).await.unwrap().len(), 1);

        assert!(repo.delete(alice, entry.id).await.unwrap());
        assert!(repo.list_for_user(alice, 50, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_only_touches_one_user() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice@x.com").await;
        let bob = seed_user(&pool, "bob@x.com").await;
        let repo = SqliteChatRepository::new(pool);

        repo.create(alice, "q1", "a").await.unwrap();
        repo.create(alice, "q2", "a").await.unwrap();
        repo.create(bob, "q3", "a").await.unwrap();

        assert_eq!(repo.clear(alice).await.unwrap(), 2);
        assert_eq!(repo.list_for_user(bob, 50, 0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_for_unknown_user_fails_foreign_key() {
        let pool = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        let err = repo.create(UserId(404), "q", "a").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
