//! The closed set of currencies published by the central bank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Currencies quoted by the BCV, in the column order of the history file.
///
/// Free-form currency strings from the outside world must pass through
/// [`FromStr`] before they reach the data layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    EUR,
    CNY,
    TRY,
    RUB,
    USD,
}

impl Currency {
    /// All known currencies, in history-file column order.
    pub const ALL: [Currency; 5] = [
        Currency::EUR,
        Currency::CNY,
        Currency::TRY,
        Currency::RUB,
        Currency::USD,
    ];

    /// ISO code, uppercase.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::CNY => "CNY",
            Currency::TRY => "TRY",
            Currency::RUB => "RUB",
            Currency::USD => "USD",
        }
    }

    /// Column header used in the history file (lowercase).
    pub fn column(&self) -> &'static str {
        match self {
            Currency::EUR => "eur",
            Currency::CNY => "cny",
            Currency::TRY => "try",
            Currency::RUB => "rub",
            Currency::USD => "usd",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "CNY" => Ok(Currency::CNY),
            "TRY" => Ok(Currency::TRY),
            "RUB" => Ok(Currency::RUB),
            "USD" => Ok(Currency::USD),
            _ => Err(QueryError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::EUR);
    }

    #[test]
    fn test_unknown_currency_fails() {
        let result = "BTC".parse::<Currency>();
        assert!(matches!(result, Err(QueryError::UnknownCurrency(_))));
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::TRY.to_string(), "TRY");
    }

    #[test]
    fn test_all_matches_column_order() {
        let columns: Vec<&str> = Currency::ALL.iter().map(|c| c.column()).collect();
        assert_eq!(columns, ["eur", "cny", "try", "rub", "usd"]);
    }
}
