//! Sample quote provider — a fixed five-day series.
//!
//! Stands in for a remote daily-quotes API: the canned response below has
//! the exact JSON shape a live endpoint would return, and `fetch` runs it
//! through the shared envelope parser. Deterministic: every call yields
//! the same five bars of symbol XYZ.

use crate::domain::SeriesPayload;

use super::envelope::parse_daily_response;
use super::provider::{QuoteProvider, SourceError};

const SAMPLE_RESPONSE: &str = r#"{
    "Time Series (Daily)": {
        "2025-05-09": {"open": 155.50, "high": 157.00, "low": 154.80, "close": 156.50, "volume": 120000},
        "2025-05-08": {"open": 152.00, "high": 153.50, "low": 151.70, "close": 153.00, "volume": 95000},
        "2025-05-07": {"open": 150.20, "high": 152.50, "low": 149.80, "close": 152.00, "volume": 100000},
        "2025-05-06": {"open": 149.50, "high": 150.80, "low": 148.90, "close": 150.10, "volume": 85000},
        "2025-05-05": {"open": 148.00, "high": 149.90, "low": 147.50, "close": 149.20, "volume": 92000}
    },
    "Meta Data": {
        "Symbol": "XYZ",
        "Last Refreshed": "2025-05-09"
    }
}"#;

/// Provider that returns the canned sample series.
#[derive(Debug, Default)]
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl QuoteProvider for SampleProvider {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch(&self) -> Result<SeriesPayload, SourceError> {
        parse_daily_response(SAMPLE_RESPONSE)
    }
}
