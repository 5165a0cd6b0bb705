//! Integration tests for the HTTP surface.
//!
//! These tests drive the full router (handlers, error payloads, rate
//! limiting) through `tower::ServiceExt::oneshot` against an in-memory
//! history provider.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rates_hex::inbound::HttpServer;
use rates_hex::{CachePolicy, RateService};
use rates_types::{Currency, RateHistoryProvider, RateRecord, RateSeries, SourceError};

/// Fixed in-memory history with a switchable outage.
struct FixedProvider {
    series: RateSeries,
    failing: AtomicBool,
}

impl FixedProvider {
    fn new(series: RateSeries) -> Arc<Self> {
        Arc::new(Self {
            series,
            failing: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl RateHistoryProvider for FixedProvider {
    async fn fetch_series(&self) -> Result<RateSeries, SourceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Transport("upstream gone".to_string()));
        }
        Ok(self.series.clone())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(d: NaiveDate, usd: Option<f64>, eur: Option<f64>) -> RateRecord {
    let mut r = RateRecord::new(d, Some(format!("published {d}")));
    r.rates.set(Currency::USD, usd);
    r.rates.set(Currency::EUR, eur);
    r
}

fn sample_series() -> RateSeries {
    RateSeries::new(vec![
        record(date(2025, 6, 30), Some(36.42), Some(39.81)),
        record(date(2025, 7, 1), Some(36.55), None),
    ])
}

fn test_server(series: RateSeries) -> HttpServer<Arc<FixedProvider>> {
    let provider = FixedProvider::new(series);
    HttpServer::new(RateService::new(provider, CachePolicy::default()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_index_lists_currencies_and_endpoints() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let currencies: Vec<&str> = json["currencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(currencies, ["EUR", "CNY", "TRY", "RUB", "USD"]);
    assert_eq!(json["endpoints"]["latest"], "/rate/latest");
}

#[tokio::test]
async fn test_latest_returns_last_record() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["date_iso"], "2025-07-01");
    assert_eq!(json["usd"], 36.55);
    assert_eq!(json["eur"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_latest_empty_series_is_404() {
    let app = test_server(RateSeries::default()).router();

    let response = app.oneshot(get("/rate/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "no_data");
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn test_history_returns_full_series() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date_iso"], "2025-06-30");
}

#[tokio::test]
async fn test_by_date_exact_match() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/2025-06-30")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["usd"], 36.42);
    assert_eq!(json["date_published"], "published 2025-06-30");
}

#[tokio::test]
async fn test_by_date_malformed_is_400_before_lookup() {
    let app = test_server(sample_series()).router();

    for uri in ["/rate/2025-1-1", "/rate/20250701"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["reason"], "invalid_date_format");
    }
}

#[tokio::test]
async fn test_by_date_absent_is_404() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/2024-12-31")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "date_not_found");
}

#[tokio::test]
async fn test_currency_and_date_roundtrips_stored_value() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/usd/2025-07-01")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["rate"], 36.55);
    assert_eq!(json["date_iso"], "2025-07-01");
}

#[tokio::test]
async fn test_unknown_currency_is_400() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/BTC/2025-07-01")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "unknown_currency");
}

#[tokio::test]
async fn test_null_rate_slot_is_404_unavailable() {
    let app = test_server(sample_series()).router();

    // EUR has no figure on 2025-07-01
    let response = app.oneshot(get("/rate/eur/2025-07-01")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "rate_unavailable");
}

#[tokio::test]
async fn test_upstream_outage_is_500() {
    let provider = FixedProvider::new(sample_series());
    provider.failing.store(true, Ordering::SeqCst);
    let app = HttpServer::new(RateService::new(provider, CachePolicy::default())).router();

    let response = app.oneshot(get("/rate/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "upstream_unreachable");
    // no stack trace, just the structured envelope
    assert!(json["error"].as_str().unwrap().contains("Transport error"));
}

#[tokio::test]
async fn test_diff_payload_covers_every_currency() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/latest/diff")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["current_date"], "2025-07-01");
    assert_eq!(json["previous_date"], "2025-06-30");

    let changes = json["changes"].as_object().unwrap();
    assert_eq!(changes.len(), 5);
    // 36.42 -> 36.55 is +0.3569%
    assert_eq!(changes["USD"]["change_pct"], 0.3569);
    // EUR lost its figure today
    assert_eq!(changes["EUR"]["detail"], "insufficient data");
}

#[tokio::test]
async fn test_diff_single_record_is_404() {
    let series = RateSeries::new(vec![record(date(2025, 7, 1), Some(36.55), None)]);
    let app = test_server(series).router();

    let response = app.oneshot(get("/rate/latest/diff")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "insufficient_data");
}

#[tokio::test]
async fn test_quarter_window_bounds() {
    let today = chrono::Local::now().date_naive();
    let series = RateSeries::new(vec![
        record(today - chrono::Days::new(100), Some(30.0), None),
        record(today - chrono::Days::new(10), Some(35.0), None),
        record(today, Some(36.0), None),
    ]);
    let app = test_server(series).router();

    let response = app.oneshot(get("/rate/usd/quarter")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["to"], today.to_string());

    let points = json["points"].as_array().unwrap();
    // the 100-day-old record falls outside the window
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["rate"], 36.0);
    assert_eq!(points[1]["rate"], 35.0);
}

#[tokio::test]
async fn test_semester_route_resolves() {
    let app = test_server(sample_series()).router();

    let response = app.oneshot(get("/rate/eur/semester")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["currency"], "EUR");
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate limiting
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    let provider = FixedProvider::new(sample_series());
    let app = HttpServer::with_rate_limit(RateService::new(provider, CachePolicy::default()), 3)
        .router();

    for i in 1..=3 {
        let response = app.clone().oneshot(get("/rate/latest")).await.unwrap();
        assert_ne!(
            response.status(),
            StatusCode::TOO_MANY_REQUESTS,
            "Request {} should not be rate limited (quota not yet exceeded)",
            i
        );
    }

    let response = app.clone().oneshot(get("/rate/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Rate limit exceeded"));
    assert_eq!(json["retry_after_seconds"], 60);
}

#[tokio::test]
async fn test_rate_limiting_health_endpoint_bypassed() {
    let provider = FixedProvider::new(sample_series());
    let app = HttpServer::with_rate_limit(RateService::new(provider, CachePolicy::default()), 1)
        .router();

    for _ in 0..10 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_rate_limiting_per_client_isolation() {
    let provider = FixedProvider::new(sample_series());
    let app = HttpServer::with_rate_limit(RateService::new(provider, CachePolicy::default()), 1)
        .router();

    let from = |ip: &str| {
        Request::builder()
            .uri("/rate/latest")
            .header("x-forwarded-for", ip)
            .body(Body::empty())
            .unwrap()
    };

    // client A exhausts its quota
    let response = app.clone().oneshot(from("10.0.0.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = app.clone().oneshot(from("10.0.0.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // client B still has its own
    let response = app.clone().oneshot(from("10.0.0.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
