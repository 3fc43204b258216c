//! Application entry point. Initializes tracing, loads configuration from
//! environment variables, builds the Axum router, and starts the HTTP server
//! with graceful shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon::config::{AppConfig, DEFAULT_LOG_FILTER};
use beacon::http::start_server;
use beacon::routes::create_router;
use beacon::state::AppState;

/// beacon: a minimal HTTP probe and info service
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "beacon=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, CLI port override taking precedence over PORT
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    tracing::info!(
        port = config.http.port,
        environment = %config.environment,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
