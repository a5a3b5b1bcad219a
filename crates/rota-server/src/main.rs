use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use rota_core::db;
use rota_core::repository::SqliteRepository;
use tracing::info;

mod app;
mod config;
mod http;

/// Personal task scheduler with recurring tasks, served over HTTP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[clap(long, default_value = "rota.toml")]
    config: String,
    /// Override the configured HTTP port
    #[clap(long)]
    port: Option<u16>,
    /// Override the configured SQLite database path
    #[clap(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rota_server=info,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::Config::load(&cli.config).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        config::Config::default()
    });
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    info!(path = %config.database_path, "opening SQLite database");
    let pool = db::establish_connection(&config.database_path).await?;

    let state = Arc::new(app::AppState {
        repo: SqliteRepository::new(pool),
    });
    let router = app::build_router(state, &config.web_dir);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Rota server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
