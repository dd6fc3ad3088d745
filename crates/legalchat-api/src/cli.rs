//! CLI definitions for the `legalchat` binary.
//!
//! Uses clap derive macros. Every `serve` flag can also be supplied through
//! its environment variable.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use legalchat_core::auth::token::DEFAULT_TOKEN_TTL_DAYS;
use legalchat_infra::sqlite::pool::DEFAULT_POOL_LIMIT;

/// Accounts and chat history for the LegalChat assistant.
#[derive(Parser)]
#[command(name = "legalchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve(ServeArgs),

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host to bind to.
    #[arg(long, env = "LEGALCHAT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// SQLite connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://legalchat.db?mode=rwc"
    )]
    pub database_url: String,

    /// Maximum pooled reader connections.
    #[arg(long, env = "DB_POOL_LIMIT", default_value_t = DEFAULT_POOL_LIMIT)]
    pub db_pool_limit: u32,

    /// Secret used to sign session tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued session tokens, in days.
    #[arg(long, env = "TOKEN_TTL_DAYS", default_value_t = DEFAULT_TOKEN_TTL_DAYS)]
    pub token_ttl_days: i64,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, env = "LEGALCHAT_OTEL")]
    pub otel: bool,
}
