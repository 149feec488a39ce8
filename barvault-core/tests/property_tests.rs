//! Property tests for store invariants.
//!
//! Uses proptest to verify:
//! 1. Idempotence — reloading the same payload never changes the row count
//! 2. Union row count — two loads leave exactly one row per distinct date
//! 3. Last load wins — a date present in both loads holds the later values

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use barvault_core::domain::{DailyBar, SeriesMeta, SeriesPayload};
use barvault_core::report::MarketStats;
use barvault_core::store::BarStore;
use chrono::{Duration, NaiveDate};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

fn single_bar_payload(date: NaiveDate, bar: DailyBar) -> SeriesPayload {
    let mut bars = BTreeMap::new();
    bars.insert(date, bar);
    SeriesPayload {
        meta: SeriesMeta {
            symbol: "PROP".into(),
            last_refreshed: date,
        },
        bars,
    }
}

fn fresh_store() -> BarStore {
    let store = BarStore::open_in_memory().unwrap();
    store.ensure_schema().unwrap();
    store
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_bar() -> impl Strategy<Value = DailyBar> {
    (
        10.0..500.0_f64,
        0.0..20.0_f64,
        0.0..1.0_f64,
        0i64..10_000_000,
    )
        .prop_map(|(low, spread, close_frac, volume)| DailyBar {
            open: low + spread * 0.25,
            high: low + spread,
            low,
            close: low + spread * close_frac,
            volume,
        })
}

fn arb_payload() -> impl Strategy<Value = SeriesPayload> {
    proptest::collection::vec((0i64..400, arb_bar()), 0..40).prop_map(|entries| {
        let mut bars = BTreeMap::new();
        for (offset, bar) in entries {
            bars.insert(base_date() + Duration::days(offset), bar);
        }
        SeriesPayload {
            meta: SeriesMeta {
                symbol: "PROP".into(),
                last_refreshed: base_date(),
            },
            bars,
        }
    })
}

proptest! {
    /// Reloading the identical payload never changes the row count.
    #[test]
    fn reload_same_payload_is_idempotent(payload in arb_payload()) {
        let mut store = fresh_store();

        store.load(&payload).unwrap();
        prop_assert_eq!(store.bar_count().unwrap(), payload.len());

        store.load(&payload).unwrap();
        prop_assert_eq!(store.bar_count().unwrap(), payload.len());
    }

    /// Two loads leave exactly one row per distinct date across both
    /// payloads, whatever the overlap.
    #[test]
    fn overlapping_loads_keep_one_row_per_date(a in arb_payload(), b in arb_payload()) {
        let mut store = fresh_store();

        store.load(&a).unwrap();
        store.load(&b).unwrap();

        let distinct = a
            .bars
            .keys()
            .chain(b.bars.keys())
            .collect::<BTreeSet<_>>()
            .len();
        prop_assert_eq!(store.bar_count().unwrap(), distinct);
    }

    /// A date present in two loads holds the values of the later one.
    #[test]
    fn last_load_wins(first in arb_bar(), second in arb_bar()) {
        let date = base_date();
        let mut store = fresh_store();

        store.load(&single_bar_payload(date, first)).unwrap();
        store.load(&single_bar_payload(date, second)).unwrap();

        let stats = MarketStats::compute(&store).unwrap();

        let highest = stats.highest_close.unwrap();
        prop_assert_eq!(highest.date, date);
        prop_assert!((highest.value - second.close).abs() < 1e-9);

        prop_assert_eq!(stats.top_volume.len(), 1);
        prop_assert_eq!(stats.top_volume[0].volume, second.volume);
    }
}
