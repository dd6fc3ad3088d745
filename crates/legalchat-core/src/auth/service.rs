//! Auth service: registration, login, and bearer token authentication.
//!
//! AuthService owns no persistent state. It hashes passwords before they
//! reach the [`UserRepository`], checks them on login, and hands out
//! [`SessionTokens`] that protected routes later verify without touching the
//! store.

use chrono::Utc;
use legalchat_types::error::{AuthError, RepositoryError};
use legalchat_types::user::{LoginOutcome, RegisteredUser, UserId, UserProfile};
use tracing::{error, info, warn};

use crate::auth::password::PasswordHasher;
use crate::auth::token::SessionTokens;
use crate::repository::user::UserRepository;

/// Registers users, verifies credentials, and issues/validates session tokens.
///
/// Generic over the store, hasher and token implementation so that
/// legalchat-core never depends on legalchat-infra.
pub struct AuthService<U: UserRepository, H: PasswordHasher, T: SessionTokens> {
    users: U,
    hasher: H,
    tokens: T,
}

impl<U: UserRepository, H: PasswordHasher, T: SessionTokens> AuthService<U, H, T> {
    pub fn new(users: U, hasher: H, tokens: T) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Create a user with a freshly salted password hash.
    ///
    /// The uniqueness check is the store's constraint; there is no prior
    /// lookup to race against.
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisteredUser, AuthError> {
        validate_credentials(email, password)?;

        let password_hash = self.hasher.hash(password)?;

        let user = self
            .users
            .create(email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateEmail => AuthError::EmailTaken,
                other => store_unavailable(other),
            })?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
        })
    }

    /// Check an email/password pair and issue a session token.
    ///
    /// Unknown email and wrong password both yield
    /// [`AuthError::InvalidCredentials`], and both cost one hash comparison.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(store_unavailable)?;

        let Some(user) = user else {
            self.hasher.verify_decoy(password);
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self.hasher.verify(password, &user.password_hash).map_err(|e| {
            error!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
            e
        })?;
        if !matches {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(user.id, Utc::now())?;
        info!(user_id = %user.id, expires_at = %issued.expires_at, "User logged in");

        Ok(LoginOutcome {
            id: user.id,
            email: user.email,
            token: issued.token,
        })
    }

    /// Resolve the bearer token of a protected request to its user id.
    ///
    /// `None` (no header, or not a bearer header) and blank tokens are
    /// [`AuthError::MissingToken`]; everything the verifier refuses is
    /// [`AuthError::InvalidToken`]. The store is not consulted.
    pub fn authenticate(&self, token: Option<&str>) -> Result<UserId, AuthError> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::MissingToken),
        };
        self.tokens.verify(token)
    }

    /// Public profile of an authenticated user.
    ///
    /// `Ok(None)` when the token outlived the account.
    pub async fn profile(&self, id: UserId) -> Result<Option<UserProfile>, AuthError> {
        let user = self.users.find_by_id(id).await.map_err(store_unavailable)?;
        Ok(user.as_ref().map(UserProfile::from))
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::Validation("email is required".to_string()));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("password is required".to_string()));
    }
    Ok(())
}

fn store_unavailable(e: RepositoryError) -> AuthError {
    AuthError::StoreUnavailable(e.to_string())
}
