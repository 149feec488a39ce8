//! Series payload — what a quote provider hands to the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bar::DailyBar;

/// Series-level metadata reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub symbol: String,
    pub last_refreshed: NaiveDate,
}

/// A fetched daily series: one bar per calendar date, plus metadata.
///
/// Bars are keyed by date, so a payload can never hold two bars for the
/// same day, and iteration is always date-ascending. The payload is
/// transient: the caller hands it to the store and discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub meta: SeriesMeta,
    pub bars: BTreeMap<NaiveDate, DailyBar>,
}

impl SeriesPayload {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
