//! The append-only rate history and its query operations.
//!
//! All operations here are pure functions over an already-fetched series;
//! fetching and freshness live behind the provider port.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Currency, RateRecord};
use crate::error::QueryError;

/// Ordered rate history, oldest first.
///
/// Order is the collector's append order, which tracks ascending date in
/// practice; "latest" is simply the last element. Range queries re-sort
/// their output explicitly instead of leaning on this.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateSeries {
    records: Vec<RateRecord>,
}

impl RateSeries {
    pub fn new(records: Vec<RateRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    pub fn latest(&self) -> Result<&RateRecord, QueryError> {
        self.records.last().ok_or(QueryError::NoData)
    }

    /// First record whose date matches exactly.
    pub fn on_date(&self, date: NaiveDate) -> Result<&RateRecord, QueryError> {
        if self.records.is_empty() {
            return Err(QueryError::NoData);
        }
        self.records
            .iter()
            .find(|r| r.date_iso == date)
            .ok_or(QueryError::DateNotFound(date))
    }

    /// Quote for a single currency on a single day.
    ///
    /// Distinguishes "no record for that day" from "record exists but the
    /// source had no usable figure for that currency".
    pub fn rate_on(&self, currency: Currency, date: NaiveDate) -> Result<(f64, &RateRecord), QueryError> {
        let record = self.on_date(date)?;
        match record.rate(currency) {
            Some(rate) => Ok((rate, record)),
            None => Err(QueryError::RateUnavailable { currency, date }),
        }
    }

    /// Trailing window of `days` calendar days anchored at `today`, both ends
    /// inclusive. Days with no value for `currency` are dropped, and the
    /// result is sorted newest first regardless of input order. A thin right
    /// edge (no row for today yet) is expected, not an error.
    pub fn window(&self, currency: Currency, today: NaiveDate, days: u64) -> Vec<RatePoint> {
        let floor = today - Days::new(days);
        let mut points: Vec<RatePoint> = self
            .records
            .iter()
            .filter(|r| r.date_iso >= floor && r.date_iso <= today)
            .filter_map(|r| {
                r.rate(currency).map(|rate| RatePoint {
                    date_iso: r.date_iso,
                    rate,
                })
            })
            .collect();
        points.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
        points
    }

    /// Percentage change between the two most recent records, per currency.
    ///
    /// Currencies missing a value on either day, or with a zero previous
    /// value, are marked insufficient instead of failing the whole diff.
    pub fn day_over_day(&self) -> Result<DayOverDay, QueryError> {
        let [.., previous, current] = self.records.as_slice() else {
            return Err(QueryError::InsufficientData);
        };

        let mut changes = BTreeMap::new();
        for currency in Currency::ALL {
            let diff = match (current.rate(currency), previous.rate(currency)) {
                (Some(cur), Some(prev)) if prev != 0.0 => CurrencyDiff::Change {
                    current: cur,
                    previous: prev,
                    change_pct: round4((cur - prev) / prev * 100.0),
                },
                _ => CurrencyDiff::insufficient(),
            };
            changes.insert(currency, diff);
        }

        Ok(DayOverDay {
            current_date: current.date_iso,
            previous_date: previous.date_iso,
            changes,
        })
    }
}

/// A single (date, value) sample inside a range window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RatePoint {
    pub date_iso: NaiveDate,
    pub rate: f64,
}

/// Day-over-day percentage changes for every known currency.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DayOverDay {
    pub current_date: NaiveDate,
    pub previous_date: NaiveDate,
    pub changes: BTreeMap<Currency, CurrencyDiff>,
}

/// Outcome of the diff for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CurrencyDiff {
    Change {
        current: f64,
        previous: f64,
        change_pct: f64,
    },
    Insufficient {
        detail: String,
    },
}

impl CurrencyDiff {
    fn insufficient() -> Self {
        CurrencyDiff::Insufficient {
            detail: "insufficient data".to_string(),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
