//! HS256 JWT session tokens.
//!
//! Implements `SessionTokens` from `legalchat-core`. Tokens carry the user id
//! as `sub` plus `iat`/`exp`, and are verified against the process-wide
//! secret alone -- no database lookup, no revocation list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use legalchat_core::auth::token::SessionTokens;
use legalchat_types::auth::{IssuedToken, SessionClaims};
use legalchat_types::error::AuthError;
use legalchat_types::user::UserId;
use secrecy::{ExposeSecret, SecretString};

/// Signs and verifies session tokens with a shared HMAC secret.
pub struct JwtSessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtSessionTokens {
    /// Build from the signing secret and token lifetime.
    ///
    /// The secret is exposed only long enough to derive the HMAC keys.
    pub fn new(secret: &SecretString, ttl: Duration) -> Self {
        let secret = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, user_id: UserId, issued_at: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let expires_at = issued_at + self.ttl;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Session token rejected");
                AuthError::InvalidToken
            })?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)
    }
}
