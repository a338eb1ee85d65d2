//! CSV price series source.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use quant_core::{DataError, PricePoint, PriceSeries};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::warn;

/// CSV record format.
///
/// Numeric fields parse leniently: a missing or unparseable value is
/// treated as absent so one malformed cell degrades a single point
/// instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open", default, deserialize_with = "lenient_f64")]
    open: Option<f64>,
    #[serde(alias = "High", alias = "high", default, deserialize_with = "lenient_f64")]
    high: Option<f64>,
    #[serde(alias = "Low", alias = "low", default, deserialize_with = "lenient_f64")]
    low: Option<f64>,
    #[serde(
        alias = "Close",
        alias = "close",
        alias = "Adj Close",
        default,
        deserialize_with = "lenient_f64"
    )]
    close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default, deserialize_with = "lenient_f64")]
    volume: Option<f64>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

/// Load a price series from a CSV file.
///
/// Accepts the common `date,open,high,low,close,volume` layouts with
/// case-insensitive headers. Rows are sorted ascending by date with
/// the last row winning on duplicate dates; a row with a malformed
/// close is kept with a 0.0 close rather than dropped.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::NoDataAvailable(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    let mut points = Vec::new();
    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        let date = parse_date(&record.date)?;

        if record.close.is_none() {
            warn!(%date, "malformed close, coercing to 0.0");
        }

        points.push(PricePoint {
            date,
            close: record.close.unwrap_or(0.0),
            open: record.open,
            high: record.high,
            low: record.low,
            volume: record.volume,
        });
    }

    if points.is_empty() {
        return Err(DataError::EmptySeries);
    }

    Ok(PriceSeries::from_points(points))
}

/// Parse the date formats seen in common export files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(date);
        }
    }

    Err(DataError::InvalidDate(date_str.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(parse_date("2024/01/15").is_ok());
        assert!(parse_date("01/15/2024").is_ok());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_load_basic_csv() {
        let path = write_temp(
            "quant_data_basic.csv",
            "date,open,high,low,close,volume\n\
             2024-01-02,100,105,99,104,10000\n\
             2024-01-03,104,106,103,105,12000\n",
        );

        let series = load_csv(&path).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![104.0, 105.0]);
        assert_eq!(series.highs(), vec![105.0, 106.0]);
    }

    #[test]
    fn test_close_only_csv_falls_back() {
        let path = write_temp(
            "quant_data_close_only.csv",
            "Date,Close\n2024-01-02,104\n2024-01-03,105\n",
        );

        let series = load_csv(&path).unwrap();
        // high/low fall back to the close
        assert_eq!(series.highs(), vec![104.0, 105.0]);
        assert_eq!(series.lows(), vec![104.0, 105.0]);
    }

    #[test]
    fn test_malformed_close_coerced() {
        let path = write_temp(
            "quant_data_malformed.csv",
            "date,close\n2024-01-02,104\n2024-01-03,n/a\n2024-01-04,106\n",
        );

        let series = load_csv(&path).unwrap();
        assert_eq!(series.closes(), vec![104.0, 0.0, 106.0]);
    }

    #[test]
    fn test_out_of_order_and_duplicate_rows() {
        let path = write_temp(
            "quant_data_dupes.csv",
            "date,close\n2024-01-03,105\n2024-01-02,104\n2024-01-03,199\n",
        );

        let series = load_csv(&path).unwrap();
        assert_eq!(series.len(), 2);
        // Sorted ascending, keep-last on the duplicate
        assert_eq!(series.closes(), vec![104.0, 199.0]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv("/nonexistent/prices.csv").unwrap_err();
        assert!(matches!(err, DataError::NoDataAvailable(_)));
    }

    #[test]
    fn test_empty_file() {
        let path = write_temp("quant_data_empty.csv", "date,close\n");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataError::EmptySeries));
    }
}
