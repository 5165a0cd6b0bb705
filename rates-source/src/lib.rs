//! # Rates Source
//!
//! Concrete history-source implementations (adapters) for the rates service.
//! This crate provides the download and decode layer that implements the
//! `RateHistoryProvider` port.

use std::time::Duration;

use async_trait::async_trait;
use rates_types::{RateHistoryProvider, RateSeries, SourceError};

pub mod decode;
pub mod file;
pub mod http;

pub use file::FileCsvSource;
pub use http::HttpCsvSource;

/// Unified source wrapper over the HTTP and local-file adapters.
pub enum Source {
    Http(HttpCsvSource),
    File(FileCsvSource),
}

/// Build a source from a location string.
///
/// `http://` and `https://` locations get the download adapter; anything
/// else is treated as a local path.
///
/// # Examples
///
/// ```ignore
/// let source = build_source("https://raw.githubusercontent.com/.../history.csv", timeout)?;
/// let source = build_source("./history.csv", timeout)?;
/// ```
pub fn build_source(location: &str, timeout: Duration) -> anyhow::Result<Source> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Source::Http(HttpCsvSource::new(location, timeout)?))
    } else {
        Ok(Source::File(FileCsvSource::new(location)))
    }
}

#[async_trait]
impl RateHistoryProvider for Source {
    async fn fetch_series(&self) -> Result<RateSeries, SourceError> {
        match self {
            Source::Http(source) => source.fetch_series().await,
            Source::File(source) => source.fetch_series().await,
        }
    }
}
