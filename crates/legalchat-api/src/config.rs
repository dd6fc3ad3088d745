//! Server configuration resolved from `serve` flags and environment.
//!
//! [`ServerConfig`] is the validated form of [`ServeArgs`]: the signing secret
//! is wrapped in a [`SecretString`] and the token lifetime becomes a
//! `chrono::Duration`.

use anyhow::bail;
use chrono::Duration;
use secrecy::SecretString;

use legalchat_infra::crypto::password::DEFAULT_COST;

use crate::cli::ServeArgs;

/// Everything `legalchat serve` needs to build [`crate::state::AppState`].
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_limit: u32,
    pub jwt_secret: SecretString,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub otel: bool,
}

impl ServerConfig {
    /// Validate CLI arguments into a config.
    ///
    /// Fails on a blank signing secret, a non-positive token lifetime, or a
    /// zero pool limit.
    pub fn from_args(args: ServeArgs) -> anyhow::Result<Self> {
        if args.jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        if args.token_ttl_days <= 0 {
            bail!("token lifetime must be at least one day, got {}", args.token_ttl_days);
        }
        if args.db_pool_limit == 0 {
            bail!("DB_POOL_LIMIT must be at least 1");
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            database_url: args.database_url,
            pool_limit: args.db_pool_limit,
            jwt_secret: SecretString::from(args.jwt_secret),
            token_ttl: Duration::days(args.token_ttl_days),
            bcrypt_cost: DEFAULT_COST,
            otel: args.otel,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
