//! Rates CLI
//!
//! Command-line interface for the BCV rates API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use rates_client::RatesClient;
use rates_types::Currency;

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "BCV rates API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the rates API
    #[arg(long, env = "RATES_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Service metadata and valid currency codes
    Info,
    /// Latest record
    Latest,
    /// Full history
    History,
    /// Record for an exact date
    Date {
        /// Trading day, YYYY-MM-DD
        date_iso: String,
    },
    /// One currency's rate on one date
    Rate {
        /// Currency (EUR, CNY, TRY, RUB, USD)
        currency: String,
        /// Trading day, YYYY-MM-DD
        date_iso: String,
    },
    /// Trailing 90-day window for a currency
    Quarter {
        /// Currency (EUR, CNY, TRY, RUB, USD)
        currency: String,
    },
    /// Trailing 180-day window for a currency
    Semester {
        /// Currency (EUR, CNY, TRY, RUB, USD)
        currency: String,
    },
    /// Day-over-day percentage change
    Diff,
    /// Check API health
    Health,
}

fn parse_currency(s: &str) -> Result<Currency> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Unknown currency: {}. Supported: EUR, CNY, TRY, RUB, USD", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RatesClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let info = client.info().await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Latest => {
            let record = client.latest().await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::History => {
            let history = client.history().await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }

        Commands::Date { date_iso } => {
            let record = client.on_date(&date_iso).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::Rate { currency, date_iso } => {
            let currency = parse_currency(&currency)?;
            let rate = client.rate_on(currency, &date_iso).await?;
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }

        Commands::Quarter { currency } => {
            let currency = parse_currency(&currency)?;
            let range = client.quarter(currency).await?;
            println!("{}", serde_json::to_string_pretty(&range)?);
        }

        Commands::Semester { currency } => {
            let currency = parse_currency(&currency)?;
            let range = client.semester(currency).await?;
            println!("{}", serde_json::to_string_pretty(&range)?);
        }

        Commands::Diff => {
            let diff = client.latest_diff().await?;
            println!("{}", serde_json::to_string_pretty(&diff)?);
        }
    }

    Ok(())
}
