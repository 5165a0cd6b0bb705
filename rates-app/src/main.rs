//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the history source adapter
//! - Create the rate service with its freshness cache
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_hex::{RateService, inbound::HttpServer};
use rates_source::build_source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates server on port {}", config.port);
    tracing::info!("Using history source: {}", config.history_location);
    tracing::info!(
        "Cache TTL: {}s, stale policy: {:?}",
        config.cache.ttl.as_secs(),
        config.cache.stale
    );

    // Build the history source (HTTP download or local file)
    let source = build_source(&config.history_location, config.fetch_timeout)?;

    // Create the rate service with its freshness cache
    let service = RateService::new(source, config.cache);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
