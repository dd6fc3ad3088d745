use thiserror::Error;

/// Errors surfaced by the auth service.
///
/// Display strings are client-safe: `InvalidCredentials` never says which
/// half of the pair was wrong, and no variant carries a password, hash or
/// token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal auth error: {0}")]
    Internal(String),
}

impl AuthError {
    /// True for failures caused by the server rather than the caller.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::StoreUnavailable(_) | AuthError::Internal(_))
    }
}

/// Errors related to chat history operations.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat entry not found")]
    NotFound,

    #[error("invalid chat entry: {0}")]
    InvalidEntry(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in legalchat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("duplicate email")]
    DuplicateEmail,

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid email or password");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(AuthError::StoreUnavailable("down".to_string()).is_server_error());
        assert!(AuthError::Internal("boom".to_string()).is_server_error());
        assert!(!AuthError::EmailTaken.is_server_error());
        assert!(!AuthError::InvalidToken.is_server_error());
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
