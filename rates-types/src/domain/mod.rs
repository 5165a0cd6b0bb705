//! Pure domain types for the rate history.

mod currency;
mod record;
mod series;

pub use currency::Currency;
pub use record::{RateRecord, RateTable, parse_date_param};
pub use series::{CurrencyDiff, DayOverDay, RatePoint, RateSeries};
