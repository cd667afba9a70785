//! Greeter: a minimal greeting and health-check HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file (falling back to built-in defaults), sets
//! up the Axum router, and starts the HTTP server. Startup failures such as
//! a bad config file or an unbindable port terminate the process with a
//! non-zero exit status.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeter::http::server::start_server;
use greeter::routes::create_router;

/// Greeter: a greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen port (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    // Create router and start server
    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
