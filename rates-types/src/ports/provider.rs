//! Rate history provider port.
//!
//! This trait defines the interface to the history store the collector
//! maintains. Implementations can be HTTP downloads, local files, mocks, etc.

use std::sync::Arc;

use crate::domain::RateSeries;
use crate::error::SourceError;

/// Port trait for rate history providers.
///
/// The whole series is fetched in one shot; the freshness cache decides how
/// often that is allowed to happen. Fetches may be slow and may fail.
#[async_trait::async_trait]
pub trait RateHistoryProvider: Send + Sync + 'static {
    async fn fetch_series(&self) -> Result<RateSeries, SourceError>;
}

/// Forwarding impl so a shared `Arc<P>` can be used anywhere a
/// `RateHistoryProvider` is expected.
#[async_trait::async_trait]
impl<T: RateHistoryProvider + ?Sized> RateHistoryProvider for Arc<T> {
    async fn fetch_series(&self) -> Result<RateSeries, SourceError> {
        (**self).fetch_series().await
    }
}
