//! Freshness cache in front of the rate history provider.
//!
//! One process-wide slot holding the last good series and its fetch time.
//! The slot is empty at startup, populated on the first successful fetch,
//! replaced wholesale on refresh, and never torn down.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};

use rates_types::{RateHistoryProvider, RateSeries, SourceError};

/// What to do when a refresh fails while an older series is still cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Surface the failure so the boundary can report an upstream error.
    #[default]
    Propagate,
    /// Log a warning and keep serving the retained series past its TTL.
    ServeStale,
}

/// Cache policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    pub ttl: Duration,
    pub stale: StalePolicy,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            // Far below the source's ~daily update cadence, far above
            // anything that would hammer the remote file.
            ttl: Duration::from_secs(15 * 60),
            stale: StalePolicy::Propagate,
        }
    }
}

struct CacheSlot {
    series: Arc<RateSeries>,
    fetched_at: Instant,
}

/// TTL-bounded memoization of the full series.
///
/// Readers observe either the fully-old or the fully-new series, never a
/// torn state: the slot is swapped under a write lock in one step. A wave
/// of concurrent misses collapses onto a single in-flight fetch.
pub struct FreshnessCache<P> {
    provider: P,
    policy: CachePolicy,
    slot: RwLock<Option<CacheSlot>>,
    refill: Mutex<()>,
}

impl<P: RateHistoryProvider> FreshnessCache<P> {
    pub fn new(provider: P, policy: CachePolicy) -> Self {
        Self {
            provider,
            policy,
            slot: RwLock::new(None),
            refill: Mutex::new(()),
        }
    }

    /// The current series, refreshed through the provider once the TTL lapses.
    pub async fn series(&self) -> Result<Arc<RateSeries>, SourceError> {
        if let Some(series) = self.fresh().await {
            return Ok(series);
        }

        // Single-flight refill: late missers queue here, re-check, and ride
        // the refill the first one completed instead of fetching again.
        let _refill = self.refill.lock().await;
        if let Some(series) = self.fresh().await {
            return Ok(series);
        }

        match self.provider.fetch_series().await {
            Ok(series) => {
                let series = Arc::new(series);
                *self.slot.write().await = Some(CacheSlot {
                    series: Arc::clone(&series),
                    fetched_at: Instant::now(),
                });
                tracing::info!(records = series.len(), "rate history refreshed");
                Ok(series)
            }
            Err(err) => {
                // The old slot stays in place; a failed refresh never
                // discards previously cached data.
                if self.policy.stale == StalePolicy::ServeStale {
                    if let Some(slot) = self.slot.read().await.as_ref() {
                        tracing::warn!(error = %err, "refresh failed, serving stale series");
                        return Ok(Arc::clone(&slot.series));
                    }
                }
                Err(err)
            }
        }
    }

    async fn fresh(&self) -> Option<Arc<RateSeries>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|s| s.fetched_at.elapsed() < self.policy.ttl)
            .map(|s| Arc::clone(&s.series))
    }
}
