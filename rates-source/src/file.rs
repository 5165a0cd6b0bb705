//! Local-file adapter, for development and tests.

use std::path::PathBuf;

use async_trait::async_trait;
use rates_types::{RateHistoryProvider, RateSeries, SourceError};

use crate::decode::decode_series;

/// Reads the history file from a local path.
///
/// Shares the decode layer with the HTTP adapter so dev runs exercise the
/// same ingestion path as production.
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RateHistoryProvider for FileCsvSource {
    async fn fetch_series(&self) -> Result<RateSeries, SourceError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Transport(format!("{}: {e}", self.path.display())))?;
        decode_series(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::Currency;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_local_history() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "date_iso,date_published,eur,cny,try,rub,usd").unwrap();
        writeln!(tmp, "2025-07-01,Martes 01 Julio 2025,39.95,5.04,0.92,0.46,36.55").unwrap();

        let source = FileCsvSource::new(tmp.path());
        let series = source.fetch_series().await.unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.latest().unwrap().rate(Currency::USD), Some(36.55));
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let source = FileCsvSource::new("/nonexistent/history.csv");
        let result = source.fetch_series().await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
