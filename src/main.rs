use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use notetag::cli::{Cli, Command};
use notetag::config::Config;
use notetag::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notetag=info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = db::init_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    db::migrate(&pool).await.context("failed to run migrations")?;

    match cli.command() {
        Command::Migrate => {
            tracing::info!(database_url = %config.database_url, "migrations applied");
        }
        Command::Serve => {
            let app = notetag::build_app(pool);
            let listener = TcpListener::bind(config.bind_addr)
                .await
                .with_context(|| format!("failed to bind {}", config.bind_addr))?;

            tracing::info!("listening on {}", config.bind_addr);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
