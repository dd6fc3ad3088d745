//! Application state wiring all services together.
//!
//! Services are generic over repository/hasher/token traits; AppState pins
//! them to the concrete infra implementations.

use std::sync::Arc;

use legalchat_core::auth::service::AuthService;
use legalchat_core::chat::service::ChatService;
use legalchat_infra::crypto::password::BcryptPasswordHasher;
use legalchat_infra::crypto::token::JwtSessionTokens;
use legalchat_infra::sqlite::chat::SqliteChatRepository;
use legalchat_infra::sqlite::pool::DatabasePool;
use legalchat_infra::sqlite::user::SqliteUserRepository;

use crate::config::ServerConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService =
    AuthService<SqliteUserRepository, BcryptPasswordHasher, JwtSessionTokens>;

pub type ConcreteChatService = ChatService<SqliteChatRepository>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database, run migrations and wire services.
    pub async fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&config.database_url, config.pool_limit).await?;

        let hasher = BcryptPasswordHasher::new(config.bcrypt_cost)?;
        let tokens = JwtSessionTokens::new(&config.jwt_secret, config.token_ttl);

        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool.clone()),
            hasher,
            tokens,
        );
        let chat_service = ChatService::new(SqliteChatRepository::new(db_pool.clone()));

        tracing::info!(
            pool_limit = config.pool_limit,
            token_ttl_days = config.token_ttl.num_days(),
            "Application state initialized"
        );

        Ok(Self {
            auth_service: Arc::new(auth_service),
            chat_service: Arc::new(chat_service),
            db_pool,
        })
    }
}
