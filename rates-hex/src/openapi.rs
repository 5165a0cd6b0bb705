//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::domain::{Currency, CurrencyDiff, DayOverDay, RatePoint, RateRecord, RateTable};
use rates_types::dto::{CurrencyRateResponse, RangeResponse, ServiceInfo};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Service metadata and valid currency codes
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    )
)]
async fn index() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Latest record
#[utoipa::path(
    get,
    path = "/rate/latest",
    tag = "rates",
    responses(
        (status = 200, description = "Most recent rate record", body = RateRecord),
        (status = 404, description = "No data available yet"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn latest() {}

/// Full history
#[utoipa::path(
    get,
    path = "/rate/history",
    tag = "rates",
    responses(
        (status = 200, description = "Full ordered history", body = Vec<RateRecord>),
        (status = 500, description = "History fetch failed")
    )
)]
async fn history() {}

/// Record for an exact date
#[utoipa::path(
    get,
    path = "/rate/{date_iso}",
    tag = "rates",
    params(
        ("date_iso" = String, Path, description = "Trading day, strict YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Record for the date", body = RateRecord),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No record for the date"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn by_date() {}

/// One currency's rate on one date
#[utoipa::path(
    get,
    path = "/rate/{currency}/{date_iso}",
    tag = "rates",
    params(
        ("currency" = String, Path, description = "Currency code (EUR, CNY, TRY, RUB, USD)"),
        ("date_iso" = String, Path, description = "Trading day, strict YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Rate for the currency and date", body = CurrencyRateResponse),
        (status = 400, description = "Malformed date or unknown currency"),
        (status = 404, description = "No record, or no figure for that currency"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn rate_for() {}

/// Trailing 90-day window
#[utoipa::path(
    get,
    path = "/rate/{currency}/quarter",
    tag = "ranges",
    params(
        ("currency" = String, Path, description = "Currency code (EUR, CNY, TRY, RUB, USD)")
    ),
    responses(
        (status = 200, description = "In-window samples, newest first", body = RangeResponse),
        (status = 400, description = "Unknown currency"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn quarter() {}

/// Trailing 180-day window
#[utoipa::path(
    get,
    path = "/rate/{currency}/semester",
    tag = "ranges",
    params(
        ("currency" = String, Path, description = "Currency code (EUR, CNY, TRY, RUB, USD)")
    ),
    responses(
        (status = 200, description = "In-window samples, newest first", body = RangeResponse),
        (status = 400, description = "Unknown currency"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn semester() {}

/// Day-over-day percentage change
#[utoipa::path(
    get,
    path = "/rate/latest/diff",
    tag = "rates",
    responses(
        (status = 200, description = "Per-currency change between the two most recent records", body = DayOverDay),
        (status = 404, description = "Fewer than two records"),
        (status = 500, description = "History fetch failed")
    )
)]
async fn latest_diff() {}

/// OpenAPI documentation for the rates API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BCV Exchange Rates API",
        version = "1.0.0",
        description = "Venezuela central-bank exchange rates as JSON, backed by the scraper-maintained history file. All endpoints are public and read-only.",
        license(name = "MIT"),
    ),
    paths(
        index,
        health,
        latest,
        history,
        by_date,
        rate_for,
        quarter,
        semester,
        latest_diff,
    ),
    components(
        schemas(
            ServiceInfo,
            CurrencyRateResponse,
            RangeResponse,
            RatePoint,
            RateRecord,
            RateTable,
            DayOverDay,
            CurrencyDiff,
            Currency,
        )
    ),
    tags(
        (name = "meta", description = "Service metadata and health"),
        (name = "rates", description = "Point and history rate queries"),
        (name = "ranges", description = "Trailing calendar windows"),
    )
)]
pub struct ApiDoc;
