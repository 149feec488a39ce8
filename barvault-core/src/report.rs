//! Market statistics — nine descriptive queries over the stored bars.
//!
//! [`MarketStats::compute`] runs the battery against the full current table
//! state and captures typed results; [`MarketStats::render`] turns them into
//! the numbered text block. Statistic order and numbering (1-9) are part of
//! the output contract, as is rounding: two decimals for prices and ratios,
//! none for mean volume. Every ranking query carries a secondary `date ASC`
//! key so ties resolve to the earliest date.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};

use crate::store::{BarStore, StorageError};

/// Mean of each price column across all rows.
#[derive(Debug, Clone, Copy)]
pub struct PriceMeans {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One (date, volume) ranking entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeDay {
    pub date: NaiveDate,
    pub volume: i64,
}

/// One (date, derived price value) entry: an intraday range, a close, or a
/// high/low ratio depending on the statistic it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDay {
    pub date: NaiveDate,
    pub value: f64,
}

/// The nine statistics in report order.
///
/// `None` or an empty vector means the table had no rows to answer from;
/// the two counts are genuine zeros in that case, not missing values.
#[derive(Debug, Clone)]
pub struct MarketStats {
    /// 1. Mean open/high/low/close.
    pub price_means: Option<PriceMeans>,
    /// 2. Top three dates by volume, descending.
    pub top_volume: Vec<VolumeDay>,
    /// 3. Top three dates by intraday range (high - low), descending.
    pub top_range: Vec<PriceDay>,
    /// 4. Date with the highest close.
    pub highest_close: Option<PriceDay>,
    /// 5. Date with the lowest close.
    pub lowest_close: Option<PriceDay>,
    /// 6. Mean volume.
    pub mean_volume: Option<f64>,
    /// 7. Days that closed above their open.
    pub up_days: i64,
    /// 8. Days that closed below their open.
    pub down_days: i64,
    /// 9. Date with the highest high/low ratio.
    pub most_volatile: Option<PriceDay>,
}

impl MarketStats {
    /// Run all nine queries against the store's current table state.
    ///
    /// Succeeds on an empty table: aggregates and extremes come back as
    /// `None`, rankings as empty vectors, counts as zero.
    pub fn compute(store: &BarStore) -> Result<Self, StorageError> {
        let conn = store.conn();
        Ok(Self {
            price_means: price_means(conn)?,
            top_volume: top_volume(conn, 3)?,
            top_range: top_range(conn, 3)?,
            highest_close: close_extreme(conn, "DESC")?,
            lowest_close: close_extreme(conn, "ASC")?,
            mean_volume: mean_volume(conn)?,
            up_days: count_rows(conn, "SELECT COUNT(*) FROM daily_stock_data WHERE close > open")?,
            down_days: count_rows(conn, "SELECT COUNT(*) FROM daily_stock_data WHERE close < open")?,
            most_volatile: most_volatile(conn)?,
        })
    }

    /// Render the numbered report block.
    ///
    /// Statistics without data print a "no data" line instead of a value;
    /// rendering never fails on an empty table.
    pub fn render(&self) -> String {
        let mut out = String::from("=== Market Statistics ===\n");

        match &self.price_means {
            Some(m) => {
                out.push_str("1. Average prices:\n");
                out.push_str(&format!("   Open:   {:.2}\n", m.open));
                out.push_str(&format!("   High:   {:.2}\n", m.high));
                out.push_str(&format!("   Low:    {:.2}\n", m.low));
                out.push_str(&format!("   Close:  {:.2}\n", m.close));
            }
            None => out.push_str("1. Average prices: no data\n"),
        }

        out.push('\n');
        if self.top_volume.is_empty() {
            out.push_str("2. Top 3 days by volume: no data\n");
        } else {
            out.push_str("2. Top 3 days by volume:\n");
            for day in &self.top_volume {
                out.push_str(&format!("   {}  volume {}\n", day.date, day.volume));
            }
        }

        out.push('\n');
        if self.top_range.is_empty() {
            out.push_str("3. Top 3 days by intraday range: no data\n");
        } else {
            out.push_str("3. Top 3 days by intraday range:\n");
            for day in &self.top_range {
                out.push_str(&format!("   {}  range {:.2}\n", day.date, day.value));
            }
        }

        out.push('\n');
        match &self.highest_close {
            Some(day) => out.push_str(&format!("4. Highest close: {} ({:.2})\n", day.date, day.value)),
            None => out.push_str("4. Highest close: no data\n"),
        }
        match &self.lowest_close {
            Some(day) => out.push_str(&format!("5. Lowest close:  {} ({:.2})\n", day.date, day.value)),
            None => out.push_str("5. Lowest close: no data\n"),
        }

        out.push('\n');
        match self.mean_volume {
            Some(mean) => out.push_str(&format!("6. Average volume: {mean:.0}\n")),
            None => out.push_str("6. Average volume: no data\n"),
        }

        out.push('\n');
        out.push_str(&format!("7. Days closed above open: {}\n", self.up_days));
        out.push_str(&format!("8. Days closed below open: {}\n", self.down_days));

        out.push('\n');
        match &self.most_volatile {
            Some(day) => out.push_str(&format!(
                "9. Most volatile day (high/low): {} (ratio {:.2})\n",
                day.date, day.value
            )),
            None => out.push_str("9. Most volatile day (high/low): no data\n"),
        }

        out
    }
}

// ── Queries ──────────────────────────────────────────────────────────

fn price_means(conn: &Connection) -> Result<Option<PriceMeans>, StorageError> {
    let means = conn.query_row(
        "SELECT AVG(open), AVG(high), AVG(low), AVG(close) FROM daily_stock_data",
        [],
        |row| {
            Ok((
                row.get::<_, Option<f64>>(0)?,
                row.get::<_, Option<f64>>(1)?,
                row.get::<_, Option<f64>>(2)?,
                row.get::<_, Option<f64>>(3)?,
            ))
        },
    )?;
    Ok(match means {
        (Some(open), Some(high), Some(low), Some(close)) => Some(PriceMeans {
            open,
            high,
            low,
            close,
        }),
        _ => None,
    })
}

fn top_volume(conn: &Connection, limit: usize) -> Result<Vec<VolumeDay>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT date, volume FROM daily_stock_data
         ORDER BY volume DESC, date ASC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit as i64], |row| {
        Ok(VolumeDay {
            date: row.get(0)?,
            volume: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn top_range(conn: &Connection, limit: usize) -> Result<Vec<PriceDay>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT date, (high - low) AS price_range FROM daily_stock_data
         ORDER BY price_range DESC, date ASC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit as i64], |row| {
        Ok(PriceDay {
            date: row.get(0)?,
            value: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn close_extreme(conn: &Connection, direction: &str) -> Result<Option<PriceDay>, StorageError> {
    let sql = format!(
        "SELECT date, close FROM daily_stock_data
         ORDER BY close {direction}, date ASC
         LIMIT 1"
    );
    Ok(conn
        .query_row(&sql, [], |row| {
            Ok(PriceDay {
                date: row.get(0)?,
                value: row.get(1)?,
            })
        })
        .optional()?)
}

fn mean_volume(conn: &Connection) -> Result<Option<f64>, StorageError> {
    Ok(conn.query_row(
        "SELECT AVG(volume) FROM daily_stock_data",
        [],
        |row| row.get::<_, Option<f64>>(0),
    )?)
}

fn count_rows(conn: &Connection, sql: &str) -> Result<i64, StorageError> {
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}

fn most_volatile(conn: &Connection) -> Result<Option<PriceDay>, StorageError> {
    // high / low is NULL when low is zero; such rows sort last and a
    // NULL in the top row reads back as no data.
    let row = conn
        .query_row(
            "SELECT date, (high / low) AS volatility_ratio FROM daily_stock_data
             ORDER BY volatility_ratio DESC, date ASC
             LIMIT 1",
            [],
            |row| Ok((row.get::<_, NaiveDate>(0)?, row.get::<_, Option<f64>>(1)?)),
        )
        .optional()?;
    Ok(row.and_then(|(date, ratio)| ratio.map(|value| PriceDay { date, value })))
}
