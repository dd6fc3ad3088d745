//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `legalchat-core` using sqlx with split
//! read/write pools. Every value is passed as a bound parameter.

use chrono::{DateTime, Utc};
use legalchat_core::repository::user::UserRepository;
use legalchat_types::error::RepositoryError;
use legalchat_types::user::{User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain User.
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        Ok(User {
            id: UserId(self.id),
            email: self.email,
            password_hash: self.password_hash,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn map_optional(row: Option<sqlx::sqlite::SqliteRow>) -> Result<Option<User>, RepositoryError> {
    match row {
        Some(row) => {
            let user_row =
                UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            Ok(Some(user_row.into_user()?))
        }
        None => Ok(None),
    }
}

impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        map_optional(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, email, password_hash, created_at FROM users WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        map_optional(row)
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(email)
        .bind(password_hash)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) => Ok(User {
                id: UserId(done.last_insert_rowid()),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::DuplicateEmail)
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url, 4).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = SqliteUserRepository::new(test_pool().await);

        let created = repo.create("a@x.com", "$2b$10$hash").await.unwrap();
        assert_eq!(created.email, "a@x.com");

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$2b$10$hash");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = SqliteUserRepository::new(test_pool().await);

        let first = repo.create("a@x.com", "h1").await.unwrap();
        let second = repo.create("b@x.com", "h2").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_by_constraint() {
        let repo = SqliteUserRepository::new(test_pool().await);

        repo.create("a@x.com", "h1").await.unwrap();
        let err = repo.create("a@x.com", "h2").await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_email_match_is_exact() {
        let repo = SqliteUserRepository::new(test_pool().await);
        repo.create("a@x.com", "h1").await.unwrap();

        assert!(repo.find_by_email("A@X.COM").await.unwrap().is_none());
        assert!(repo.find_by_email("a@x.co").await.unwrap().is_none());
        // Stored case-sensitively, so a differently cased address is a new user
        assert!(repo.create("A@x.com", "h2").await.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_is_safe_against_injection() {
        let repo = SqliteUserRepository::new(test_pool().await);
        repo.create("a@x.com", "h1").await.unwrap();

        let found = repo.find_by_email("' OR '1'='1").await.unwrap();
        assert!(found.is_none());

        let hostile = "x'); DROP TABLE users; --";
        repo.create(hostile, "h2").await.unwrap();
        let found = repo.find_by_email(hostile).await.unwrap().unwrap();
        assert_eq!(found.email, hostile);
        assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = SqliteUserRepository::new(test_pool().await);
        let created = repo.create("a@x.com", "h1").await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
        assert!(repo.find_by_id(UserId(9999)).await.unwrap().is_none());
    }
}
