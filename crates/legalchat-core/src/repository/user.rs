//! User (credential store) repository trait definition.

use legalchat_types::error::RepositoryError;
use legalchat_types::user::{User, UserId};

/// Repository trait for user record persistence.
///
/// Implementations live in legalchat-infra (e.g., SqliteUserRepository).
/// Each method performs exactly one storage operation; no caching.
pub trait UserRepository: Send + Sync {
    /// Exact-match lookup by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Lookup by id.
    fn find_by_id(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Insert a new user. Returns the stored record with its assigned id.
    ///
    /// Must fail with [`RepositoryError::DuplicateEmail`] when the email is
    /// already taken, as reported by the storage layer's uniqueness
    /// constraint rather than a prior lookup.
    fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;
}
