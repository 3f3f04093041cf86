//! Readings mock - stand-in ingestion server for local energy-monitor development

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readings_mock::api::{self, AppState};
use readings_mock::config::Config;

#[derive(Parser)]
#[command(name = "readings-mock")]
#[command(about = "Mock ingestion server for energy-monitor readings")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("readings_mock={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config {
        port: cli.port,
        ..Config::default()
    };

    tracing::info!("Starting HTTP server on port {}", config.port);

    let state = AppState {
        config: Arc::new(config.clone()),
    };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    println!("Readings mock running at http://localhost:{}", config.port);
    println!("  Ingest: POST http://localhost:{}/api/readings", config.port);
    println!("  Health: http://localhost:{}/health", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
