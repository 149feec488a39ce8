//! Daily-quotes JSON envelope.
//!
//! The wire shape used by quote APIs of the Alpha Vantage family: a
//! `"Time Series (Daily)"` object keyed by date plus a `"Meta Data"` block.
//! The sample provider parses a canned document of this shape; a remote
//! provider would feed its response body through the same path.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{DailyBar, SeriesMeta, SeriesPayload};

use super::provider::SourceError;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Meta Data")]
    meta: EnvelopeMeta,
    #[serde(rename = "Time Series (Daily)")]
    series: BTreeMap<String, EnvelopeBar>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeMeta {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Last Refreshed")]
    last_refreshed: String,
}

#[derive(Debug, Deserialize)]
struct EnvelopeBar {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
}

/// Parse a daily-quotes JSON document into a series payload.
///
/// Every failure maps to [`SourceError::MalformedResponse`]: invalid JSON,
/// a missing block, or a date that is not `YYYY-MM-DD`.
pub fn parse_daily_response(raw: &str) -> Result<SeriesPayload, SourceError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

    let last_refreshed = parse_date(&envelope.meta.last_refreshed)?;

    let mut bars = BTreeMap::new();
    for (date, bar) in &envelope.series {
        bars.insert(
            parse_date(date)?,
            DailyBar {
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
            },
        );
    }

    Ok(SeriesPayload {
        meta: SeriesMeta {
            symbol: envelope.meta.symbol,
            last_refreshed,
        },
        bars,
    })
}

fn parse_date(text: &str) -> Result<NaiveDate, SourceError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| SourceError::MalformedResponse(format!("bad date '{text}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "Time Series (Daily)": {
            "2024-06-03": {"open": 10.0, "high": 11.0, "low": 9.5, "close": 10.5, "volume": 1500}
        },
        "Meta Data": {
            "Symbol": "ABC",
            "Last Refreshed": "2024-06-03"
        }
    }"#;

    #[test]
    fn parses_minimal_document() {
        let payload = parse_daily_response(MINIMAL).unwrap();
        assert_eq!(payload.meta.symbol, "ABC");
        assert_eq!(
            payload.meta.last_refreshed,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
        assert_eq!(payload.len(), 1);

        let bar = payload.bars[&NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()];
        assert_eq!(bar.volume, 1500);
        assert!((bar.close - 10.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_daily_response("{ not json").unwrap_err();
        assert!(matches!(err, SourceError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_missing_series_block() {
        let err = parse_daily_response(r#"{"Meta Data": {"Symbol": "A", "Last Refreshed": "2024-06-03"}}"#)
            .unwrap_err();
        assert!(matches!(err, SourceError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_unparseable_date_key() {
        let doc = r#"{
            "Time Series (Daily)": {
                "06/03/2024": {"open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0, "volume": 1}
            },
            "Meta Data": {"Symbol": "A", "Last Refreshed": "2024-06-03"}
        }"#;
        let err = parse_daily_response(doc).unwrap_err();
        match err {
            SourceError::MalformedResponse(msg) => assert!(msg.contains("06/03/2024")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
