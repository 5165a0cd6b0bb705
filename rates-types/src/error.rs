//! Error types for the rates service.

use chrono::NaiveDate;

use crate::domain::Currency;

/// Domain-level errors (query violations over the series).
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("No rate data available")]
    NoData,

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("No record for date {0}")]
    DateNotFound(NaiveDate),

    #[error("Rate for {currency} is unavailable on {date}")]
    RateUnavailable { currency: Currency, date: NaiveDate },

    #[error("At least two records are required")]
    InsufficientData,
}

/// Source-level errors (history fetch failures).
///
/// Either kind aborts the whole fetch; the cache keeps whatever it held.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed history: {0}")]
    Malformed(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes; `reason` is the machine-readable
/// counterpart of the human message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest {
        message: String,
        reason: &'static str,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        reason: &'static str,
    },

    #[error("{message}")]
    Upstream {
        message: String,
        reason: &'static str,
    },
}

impl AppError {
    pub fn reason(&self) -> &'static str {
        match self {
            AppError::BadRequest { reason, .. }
            | AppError::NotFound { reason, .. }
            | AppError::Upstream { reason, .. } => reason,
        }
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        let message = err.to_string();
        match err {
            QueryError::InvalidDateFormat(_) => AppError::BadRequest {
                message,
                reason: "invalid_date_format",
            },
            QueryError::UnknownCurrency(_) => AppError::BadRequest {
                message,
                reason: "unknown_currency",
            },
            QueryError::NoData => AppError::NotFound {
                message,
                reason: "no_data",
            },
            QueryError::DateNotFound(_) => AppError::NotFound {
                message,
                reason: "date_not_found",
            },
            QueryError::RateUnavailable { .. } => AppError::NotFound {
                message,
                reason: "rate_unavailable",
            },
            QueryError::InsufficientData => AppError::NotFound {
                message,
                reason: "insufficient_data",
            },
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        let message = err.to_string();
        match err {
            SourceError::Transport(_) => AppError::Upstream {
                message,
                reason: "upstream_unreachable",
            },
            SourceError::Malformed(_) => AppError::Upstream {
                message,
                reason: "malformed_source",
            },
        }
    }
}
