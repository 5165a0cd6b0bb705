//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use rates_types::{AppError, Currency, RateHistoryProvider, ServiceInfo};

use crate::service::{RateService, Window};

/// Application state shared across handlers.
pub struct AppState<P: RateHistoryProvider> {
    pub service: RateService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "reason": self.0.reason(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Service metadata and the list of valid currency codes.
pub async fn index() -> impl IntoResponse {
    let endpoints = [
        ("latest", "/rate/latest"),
        ("history", "/rate/history"),
        ("by_date", "/rate/{date_iso}"),
        ("by_currency_and_date", "/rate/{currency}/{date_iso}"),
        ("quarter", "/rate/{currency}/quarter"),
        ("semester", "/rate/{currency}/semester"),
        ("latest_diff", "/rate/latest/diff"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect();

    Json(ServiceInfo {
        message: "BCV exchange rates API".to_string(),
        currencies: Currency::ALL.to_vec(),
        endpoints,
    })
}

/// Latest record.
#[tracing::instrument(skip(state))]
pub async fn latest<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.service.latest().await?;
    Ok(Json(record))
}

/// Full history, oldest first.
#[tracing::instrument(skip(state))]
pub async fn history<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let series = state.service.history().await?;
    Ok(Json(series))
}

/// Record for an exact date.
#[tracing::instrument(skip(state), fields(date = %date_iso))]
pub async fn by_date<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(date_iso): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.service.on_date(&date_iso).await?;
    Ok(Json(record))
}

/// One currency's rate on one date.
#[tracing::instrument(skip(state), fields(currency = %currency, date = %date_iso))]
pub async fn rate_for<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path((currency, date_iso)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let rate = state.service.rate_on(&currency, &date_iso).await?;
    Ok(Json(rate))
}

/// Trailing 90-day window for one currency.
#[tracing::instrument(skip(state), fields(currency = %currency))]
pub async fn quarter<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(currency): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let range = state.service.window(&currency, Window::Quarter).await?;
    Ok(Json(range))
}

/// Trailing 180-day window for one currency.
#[tracing::instrument(skip(state), fields(currency = %currency))]
pub async fn semester<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(currency): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let range = state.service.window(&currency, Window::Semester).await?;
    Ok(Json(range))
}

/// Day-over-day percentage change between the two most recent records.
#[tracing::instrument(skip(state))]
pub async fn latest_diff<P: RateHistoryProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let diff = state.service.diff().await?;
    Ok(Json(diff))
}
