//! CSV decoding for the published rate history.
//!
//! The collector appends one row per trading day under a header row. The
//! column layout has drifted across collector versions, so decoding is
//! header-driven: currency columns may be missing entirely and individual
//! cells may hold garbage. Both degrade to a `None` slot. Only a body
//! without a `date_iso` column is rejected outright.

use chrono::NaiveDate;
use rates_types::{Currency, RateRecord, RateSeries, SourceError};

const DATE_COLUMN: &str = "date_iso";
const PUBLISHED_COLUMN: &str = "date_published";

/// Decode the full history file into a series, oldest row first.
pub fn decode_series(text: &str) -> Result<RateSeries, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SourceError::Malformed(e.to_string()))?
        .clone();

    let date_idx = headers
        .iter()
        .position(|h| h == DATE_COLUMN)
        .ok_or_else(|| SourceError::Malformed(format!("missing `{DATE_COLUMN}` column")))?;
    let published_idx = headers.iter().position(|h| h == PUBLISHED_COLUMN);
    let currency_columns: Vec<(Currency, usize)> = Currency::ALL
        .iter()
        .filter_map(|&c| headers.iter().position(|h| h == c.column()).map(|i| (c, i)))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SourceError::Malformed(e.to_string()))?;

        // A row that cannot be keyed by date cannot be queried; skip it
        // rather than dropping the whole history.
        let Some(date) = row.get(date_idx).and_then(parse_row_date) else {
            tracing::warn!(?row, "skipping history row without a usable date");
            continue;
        };

        let published = published_idx
            .and_then(|i| row.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let mut record = RateRecord::new(date, published);
        for &(currency, idx) in &currency_columns {
            record.rates.set(currency, row.get(idx).and_then(parse_cell));
        }
        records.push(record);
    }

    Ok(RateSeries::new(records))
}

fn parse_row_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell, "%Y-%m-%d").ok()
}

/// Malformed numeric cells become `None` rather than failing the record.
fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_layout() {
        let body = "\
date_iso,date_published,eur,cny,try,rub,usd
2025-06-30,Lunes 30 Junio 2025,39.81,5.02,0.91,0.46,36.42
2025-07-01,Martes 01 Julio 2025,39.95,5.04,0.92,0.46,36.55
";
        let series = decode_series(body).unwrap();
        assert_eq!(series.len(), 2);

        let latest = series.latest().unwrap();
        assert_eq!(latest.date_iso.to_string(), "2025-07-01");
        assert_eq!(latest.date_published.as_deref(), Some("Martes 01 Julio 2025"));
        assert_eq!(latest.rate(Currency::USD), Some(36.55));
        assert_eq!(latest.rate(Currency::TRY), Some(0.92));
    }

    #[test]
    fn test_malformed_cell_degrades_to_none() {
        let body = "\
date_iso,eur,usd
2025-07-01,not-a-number,36.55
";
        let series = decode_series(body).unwrap();
        let record = series.latest().unwrap();
        assert_eq!(record.rate(Currency::EUR), None);
        assert_eq!(record.rate(Currency::USD), Some(36.55));
    }

    #[test]
    fn test_missing_currency_column_degrades_to_none() {
        let body = "\
date_iso,usd
2025-07-01,36.55
";
        let series = decode_series(body).unwrap();
        let record = series.latest().unwrap();
        assert_eq!(record.rate(Currency::USD), Some(36.55));
        assert_eq!(record.rate(Currency::EUR), None);
        assert_eq!(record.date_published, None);
    }

    #[test]
    fn test_row_without_date_skipped() {
        let body = "\
date_iso,usd
2025-07-01,36.42
garbage,36.50
2025-07-02,36.55
";
        let series = decode_series(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().unwrap().rate(Currency::USD), Some(36.55));
    }

    #[test]
    fn test_missing_date_column_is_malformed() {
        let body = "fecha,usd\n2025-07-01,36.55\n";
        let result = decode_series(body);
        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[test]
    fn test_header_only_body_is_empty_series() {
        let body = "date_iso,date_published,eur,cny,try,rub,usd\n";
        let series = decode_series(body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_non_finite_cell_degrades_to_none() {
        let body = "\
date_iso,usd
2025-07-01,NaN
";
        let series = decode_series(body).unwrap();
        assert_eq!(series.latest().unwrap().rate(Currency::USD), None);
    }
}
