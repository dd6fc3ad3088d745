//! PasswordHasher trait for salted one-way password digests.
//!
//! Defined in legalchat-core so the auth service can hash and verify without
//! coupling to a specific algorithm. The bcrypt adapter lives in
//! legalchat-infra.

use legalchat_types::error::AuthError;

/// Abstraction over salted password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of `plaintext`. Two calls with the same input
    /// must yield different digests.
    fn hash(&self, plaintext: &str) -> Result<String, AuthError>;

    /// Check `plaintext` against a digest produced by [`hash`](Self::hash).
    ///
    /// `Ok(false)` on mismatch; `Err` only when the stored digest is malformed.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError>;

    /// Spend the same work as [`verify`](Self::verify) against a throwaway
    /// digest. Called when the account does not exist so that an unknown
    /// email and a wrong password take comparable time.
    fn verify_decoy(&self, plaintext: &str);
}
