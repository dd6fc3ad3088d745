//! LegalChat REST API entry point.
//!
//! Binary name: `legalchat`
//!
//! Parses CLI arguments, initializes tracing, database and services, then
//! starts the REST API server.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use legalchat_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "legalchat", &mut std::io::stdout());
            Ok(())
        }

        Commands::Serve(args) => {
            let config = ServerConfig::from_args(args)?;

            init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), config.otel)
                .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

            let result = serve(config, cli.quiet).await;
            shutdown_tracing();
            result
        }
    }
}

async fn serve(config: ServerConfig, quiet: bool) -> anyhow::Result<()> {
    let state = AppState::init(&config).await?;
    let db_pool = state.db_pool.clone();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "LegalChat API listening");

    if !quiet {
        println!(
            "  {} LegalChat API listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.writer.close().await;
    db_pool.reader.close().await;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
