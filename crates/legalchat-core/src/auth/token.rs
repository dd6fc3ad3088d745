//! SessionTokens trait for issuing and verifying self-contained tokens.

use chrono::{DateTime, Utc};
use legalchat_types::auth::IssuedToken;
use legalchat_types::error::AuthError;
use legalchat_types::user::UserId;

/// Default session lifetime in days.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Issues and verifies signed session tokens.
///
/// Verification must not touch the credential store: the signature and the
/// embedded expiry are the whole check.
pub trait SessionTokens: Send + Sync {
    /// Sign a token for `user_id`, valid from `issued_at` for the configured TTL.
    fn issue(&self, user_id: UserId, issued_at: DateTime<Utc>) -> Result<IssuedToken, AuthError>;

    /// Verify signature and expiry and return the embedded user id.
    ///
    /// Any failure (bad signature, expired, malformed) is
    /// [`AuthError::InvalidToken`].
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
