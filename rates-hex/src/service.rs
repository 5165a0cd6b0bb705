//! Rate Query Application Service
//!
//! Orchestrates validation, cache-mediated fetches, and the pure series
//! operations. Contains NO transport logic - pure query orchestration.
//!
//! Parameter validation always runs before any fetch, so a malformed date
//! or currency never costs a provider round-trip.

use std::sync::Arc;

use chrono::Days;

use rates_types::{
    AppError, Currency, CurrencyRateResponse, DayOverDay, RangeResponse, RateHistoryProvider,
    RateRecord, RateSeries, parse_date_param,
};

use crate::cache::{CachePolicy, FreshnessCache};

/// Trailing calendar windows the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Quarter,
    Semester,
}

impl Window {
    pub fn days(self) -> u64 {
        match self {
            Window::Quarter => 90,
            Window::Semester => 180,
        }
    }
}

/// Application service for rate queries.
///
/// Generic over `P: RateHistoryProvider` - the adapter is injected at compile
/// time. This enables:
/// - Swapping history sources without code changes
/// - Testing with an in-memory provider
/// - Compile-time checks for port implementation
pub struct RateService<P: RateHistoryProvider> {
    cache: FreshnessCache<P>,
}

impl<P: RateHistoryProvider> RateService<P> {
    /// Creates a new rate service over the given provider.
    pub fn new(provider: P, policy: CachePolicy) -> Self {
        Self {
            cache: FreshnessCache::new(provider, policy),
        }
    }

    /// Latest record, i.e. the last row the collector appended.
    pub async fn latest(&self) -> Result<RateRecord, AppError> {
        let series = self.cache.series().await?;
        Ok(series.latest()?.clone())
    }

    /// The full ordered history.
    pub async fn history(&self) -> Result<Arc<RateSeries>, AppError> {
        Ok(self.cache.series().await?)
    }

    /// Record for an exact `YYYY-MM-DD` date.
    pub async fn on_date(&self, raw_date: &str) -> Result<RateRecord, AppError> {
        let date = parse_date_param(raw_date)?;
        let series = self.cache.series().await?;
        Ok(series.on_date(date)?.clone())
    }

    /// One currency's rate on one date.
    pub async fn rate_on(
        &self,
        raw_currency: &str,
        raw_date: &str,
    ) -> Result<CurrencyRateResponse, AppError> {
        let currency: Currency = raw_currency.parse()?;
        let date = parse_date_param(raw_date)?;

        let series = self.cache.series().await?;
        let (rate, record) = series.rate_on(currency, date)?;

        Ok(CurrencyRateResponse {
            currency,
            date_iso: record.date_iso,
            date_published: record.date_published.clone(),
            rate,
        })
    }

    /// Trailing window for one currency, anchored at today's calendar date.
    ///
    /// The right edge is expected to be sparse when the collector has not
    /// run yet today.
    pub async fn window(
        &self,
        raw_currency: &str,
        window: Window,
    ) -> Result<RangeResponse, AppError> {
        let currency: Currency = raw_currency.parse()?;
        let today = chrono::Local::now().date_naive();

        let series = self.cache.series().await?;
        let points = series.window(currency, today, window.days());

        Ok(RangeResponse {
            currency,
            from: today - Days::new(window.days()),
            to: today,
            points,
        })
    }

    /// Day-over-day percentage change for all currencies.
    pub async fn diff(&self) -> Result<DayOverDay, AppError> {
        let series = self.cache.series().await?;
        Ok(series.day_over_day()?)
    }
}
