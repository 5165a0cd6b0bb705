//! # Rates Client SDK
//!
//! A typed Rust client for the BCV rates API.

use rates_types::{
    Currency, CurrencyRateResponse, DayOverDay, RangeResponse, RateRecord, ServiceInfo,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rates API client.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Service metadata and the list of valid currency codes.
    pub async fn info(&self) -> Result<ServiceInfo, ClientError> {
        self.get("/").await
    }

    /// Latest record.
    pub async fn latest(&self) -> Result<RateRecord, ClientError> {
        self.get("/rate/latest").await
    }

    /// The full ordered history.
    pub async fn history(&self) -> Result<Vec<RateRecord>, ClientError> {
        self.get("/rate/history").await
    }

    /// Record for an exact `YYYY-MM-DD` date.
    pub async fn on_date(&self, date_iso: &str) -> Result<RateRecord, ClientError> {
        self.get(&format!("/rate/{}", date_iso)).await
    }

    /// One currency's rate on one date.
    pub async fn rate_on(
        &self,
        currency: Currency,
        date_iso: &str,
    ) -> Result<CurrencyRateResponse, ClientError> {
        self.get(&format!("/rate/{}/{}", currency, date_iso)).await
    }

    /// Trailing 90-day window for one currency.
    pub async fn quarter(&self, currency: Currency) -> Result<RangeResponse, ClientError> {
        self.get(&format!("/rate/{}/quarter", currency)).await
    }

    /// Trailing 180-day window for one currency.
    pub async fn semester(&self, currency: Currency) -> Result<RangeResponse, ClientError> {
        self.get(&format!("/rate/{}/semester", currency)).await
    }

    /// Day-over-day percentage change for all currencies.
    pub async fn latest_diff(&self) -> Result<DayOverDay, ClientError> {
        self.get("/rate/latest/diff").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RatesClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = RatesClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
