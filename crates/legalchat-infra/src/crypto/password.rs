//! bcrypt password hashing.
//!
//! Implements the `PasswordHasher` trait from `legalchat-core` using the
//! `bcrypt` crate. Digests are in the standard `$2b$<cost>$<salt+hash>`
//! format, so the salt travels with the hash.
//!
//! SECURITY: Error messages never contain the plaintext or the digest.

use legalchat_core::auth::password::PasswordHasher;
use legalchat_types::error::AuthError;

/// Work factor used in production (2^10 rounds).
pub const DEFAULT_COST: u32 = 10;

const DECOY_PASSWORD: &str = "legalchat-decoy-password";

/// bcrypt implementation of `PasswordHasher`.
///
/// Holds a pre-computed decoy digest at the same cost so that a login for an
/// unknown email still performs one full bcrypt verification.
pub struct BcryptPasswordHasher {
    cost: u32,
    decoy_hash: String,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor (4..=31).
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        let decoy_hash = bcrypt::hash(DECOY_PASSWORD, cost)
            .map_err(|e| AuthError::Internal(format!("bcrypt setup failed: {e}")))?;
        Ok(Self { cost, decoy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(plaintext, hash)
            .map_err(|e| AuthError::Internal(format!("password verification failed: {e}")))
    }

    fn verify_decoy(&self, plaintext: &str) {
        let _ = bcrypt::verify(plaintext, &self.decoy_hash);
    }
}
