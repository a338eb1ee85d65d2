//! Price series types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-day observation.
///
/// Only `date` and `close` are required; `high` and `low` fall back to
/// the close when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
    /// Opening price
    pub open: Option<f64>,
    /// Highest price
    pub high: Option<f64>,
    /// Lowest price
    pub low: Option<f64>,
    /// Trading volume
    pub volume: Option<f64>,
}

impl PricePoint {
    /// Create a point from a date and closing price.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }

    /// Attach open/high/low prices.
    pub fn with_ohlc(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Attach trading volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// High price, falling back to the close.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high.unwrap_or(self.close)
    }

    /// Low price, falling back to the close.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low.unwrap_or(self.close)
    }
}

/// An ordered, date-deduplicated sequence of price points.
///
/// The constructor sorts ascending by date and keeps the last point
/// seen for each duplicate date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

/// A malformed value on a single point degrades to 0.0 rather than
/// failing the whole series computation.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl PriceSeries {
    /// Build a series from points in any order.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        // Keep-last per duplicate date: the stable sort preserves input
        // order within a date, so the later record wins.
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the last point.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Get a point by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    /// Iterate over the points in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Extract closing prices, coercing non-finite values to 0.0.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| sanitize(p.close)).collect()
    }

    /// Extract high prices (close fallback), coercing non-finite values to 0.0.
    pub fn highs(&self) -> Vec<f64> {
        self.points.iter().map(|p| sanitize(p.high())).collect()
    }

    /// Extract low prices (close fallback), coercing non-finite values to 0.0.
    pub fn lows(&self) -> Vec<f64> {
        self.points.iter().map(|p| sanitize(p.low())).collect()
    }

    /// Extract trading dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = PricePoint>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
