//! One trading day's quotes and the date validation boundary.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::domain::Currency;
use crate::error::QueryError;

static DATE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Strict `YYYY-MM-DD` gate for user-supplied dates.
///
/// The pattern check runs before the calendar parse, so `2025-1-1` and
/// `20251101` fail on shape while `2025-02-30` fails on the calendar.
pub fn parse_date_param(raw: &str) -> Result<NaiveDate, QueryError> {
    if !DATE_PARAM.is_match(raw) {
        return Err(QueryError::InvalidDateFormat(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| QueryError::InvalidDateFormat(raw.to_string()))
}

/// Per-currency quote slots for a single day.
///
/// A `None` slot means the source field was absent or malformed; the decision
/// is made once at ingestion and never re-interpreted downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateTable {
    pub eur: Option<f64>,
    pub cny: Option<f64>,
    #[serde(rename = "try")]
    pub r#try: Option<f64>,
    pub rub: Option<f64>,
    pub usd: Option<f64>,
}

impl RateTable {
    /// Value for `currency`, `None` when the source had no usable figure.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::EUR => self.eur,
            Currency::CNY => self.cny,
            Currency::TRY => self.r#try,
            Currency::RUB => self.rub,
            Currency::USD => self.usd,
        }
    }

    pub fn set(&mut self, currency: Currency, value: Option<f64>) {
        match currency {
            Currency::EUR => self.eur = value,
            Currency::CNY => self.cny = value,
            Currency::TRY => self.r#try = value,
            Currency::RUB => self.rub = value,
            Currency::USD => self.usd = value,
        }
    }
}

/// One entry of the published history: a trading day and its quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateRecord {
    /// Calendar date, the primary ordering key. Unique across the series.
    pub date_iso: NaiveDate,
    /// Human-readable label from the source page, kept for display only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(flatten)]
    pub rates: RateTable,
}

impl RateRecord {
    pub fn new(date_iso: NaiveDate, date_published: Option<String>) -> Self {
        Self {
            date_iso,
            date_published,
            rates: RateTable::default(),
        }
    }

    /// Quote for `currency` on this day, if the source had one.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency)
    }
}
