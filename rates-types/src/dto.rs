//! Data Transfer Objects (DTOs) for responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::domain::{Currency, RatePoint};

// ─────────────────────────────────────────────────────────────────────────────
// Service metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata served at the API root.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// Human-readable greeting
    #[schema(example = "BCV exchange rates API")]
    pub message: String,
    /// Valid currency codes for path parameters
    pub currencies: Vec<Currency>,
    /// Endpoint map, path templates keyed by name
    pub endpoints: BTreeMap<String, String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Query DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A single currency's rate on a single day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrencyRateResponse {
    pub currency: Currency,
    /// The matched trading day
    pub date_iso: NaiveDate,
    /// Source-provided publication label, when the collector captured one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    /// Bolivar price of one unit of `currency`
    #[schema(example = 36.55)]
    pub rate: f64,
}

/// A trailing calendar window of one currency's rates, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RangeResponse {
    pub currency: Currency,
    /// Lower window bound (inclusive)
    pub from: NaiveDate,
    /// Upper window bound (inclusive), the anchor "today"
    pub to: NaiveDate,
    /// In-window samples; days without a figure for `currency` are omitted
    pub points: Vec<RatePoint>,
}
