//! DailyBar — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// OHLCV values for a single trading day.
///
/// The calendar date lives outside the bar: a fetched series keys its bars
/// by date, and the store uses the date as the table's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl DailyBar {
    /// Basic OHLCV sanity check: low <= open <= high, low <= close <= high,
    /// volume non-negative. NaN prices fail every comparison and come back
    /// insane. The load path does not call this; the system trusts the
    /// provider's numbers, and callers that want a gate run it themselves.
    pub fn is_sane(&self) -> bool {
        self.low <= self.high
            && self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
            && self.volume >= 0
    }

    /// Intraday range: high minus low.
    pub fn intraday_range(&self) -> f64 {
        self.high - self.low
    }

    /// High/low ratio, the per-day volatility proxy.
    pub fn volatility_ratio(&self) -> f64 {
        self.high / self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> DailyBar {
        DailyBar {
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
            volume: 50_000,
        }
    }

    #[test]
    fn bar_is_sane() {
        assert!(sample_bar().is_sane());
    }

    #[test]
    fn bar_detects_high_below_low() {
        let mut bar = sample_bar();
        bar.high = 97.0; // below low
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_detects_close_outside_range() {
        let mut bar = sample_bar();
        bar.close = 106.0; // above high
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_detects_negative_volume() {
        let mut bar = sample_bar();
        bar.volume = -1;
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_detects_nan_price() {
        let mut bar = sample_bar();
        bar.open = f64::NAN;
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_range_and_ratio() {
        let bar = sample_bar();
        assert!((bar.intraday_range() - 7.0).abs() < 1e-12);
        assert!((bar.volatility_ratio() - 105.0 / 98.0).abs() < 1e-12);
    }

    #[test]
    fn bar_serialization_roundtrip() {
        let bar = sample_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let deser: DailyBar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, deser);
    }
}
