//! HTTP adapter: downloads the history file from its published URL.

use std::time::Duration;

use async_trait::async_trait;
use rates_types::{RateHistoryProvider, RateSeries, SourceError};

use crate::decode::decode_series;

/// Downloads the whole history file on every (cache-allowed) call.
///
/// The client carries an explicit timeout so a hung remote becomes a
/// reported failure instead of a stuck request.
pub struct HttpCsvSource {
    url: String,
    http: reqwest::Client,
}

impl HttpCsvSource {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RateHistoryProvider for HttpCsvSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_series(&self) -> Result<RateSeries, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let series = decode_series(&body)?;
        tracing::debug!(records = series.len(), "downloaded rate history");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_keeps_url() {
        let source = HttpCsvSource::new(
            "https://example.com/history.csv",
            HttpCsvSource::DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!(source.url(), "https://example.com/history.csv");
    }
}
