//! # Rates Types
//!
//! Domain types and port traits for the BCV exchange-rate query service.
//! This crate has ZERO external IO dependencies - only data structures,
//! query rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, RateRecord, RateSeries)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Currency, CurrencyDiff, DayOverDay, RatePoint, RateRecord, RateSeries, RateTable,
    parse_date_param,
};
pub use dto::*;
pub use error::{AppError, QueryError, SourceError};
pub use ports::RateHistoryProvider;
