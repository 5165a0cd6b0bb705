//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use rates_hex::{CachePolicy, StalePolicy};

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// URL or local path of the history file the collector maintains.
    pub history_location: String,
    pub fetch_timeout: Duration,
    pub cache: CachePolicy,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let history_location = env::var("RATES_HISTORY_URL")
            .map_err(|_| anyhow::anyhow!("RATES_HISTORY_URL environment variable is required"))?;

        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map(Duration::from_secs)?;

        let ttl = env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .map(Duration::from_secs)?;

        let stale = match env::var("SERVE_STALE").as_deref() {
            Ok("true") | Ok("1") => StalePolicy::ServeStale,
            _ => StalePolicy::Propagate,
        };

        Ok(Self {
            port,
            history_location,
            fetch_timeout,
            cache: CachePolicy { ttl, stale },
        })
    }
}
