//! SQLite-backed bar store.
//!
//! One table, `daily_stock_data`, keyed by date. The store owns the table
//! exclusively: callers write through [`BarStore::load`] and read through
//! the report queries. No delete or update-by-query operations exist; the
//! table is append/overwrite-only and rows are never removed.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::domain::SeriesPayload;

/// Storage failures. All fatal to the run: a failed load rolls back the
/// whole batch, so no partial write is ever visible.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened or created.
    #[error("cannot open store at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// Schema creation, upsert, or query failure.
    #[error("storage failure: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to one SQLite database holding the daily bar table.
pub struct BarStore {
    conn: Connection,
}

impl BarStore {
    /// Open (or create) the store at an explicit path.
    ///
    /// There is no default location at this layer: every caller says where
    /// the data lives, so parallel runs and tests never collide on a shared
    /// filename.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create the bar table if it does not exist. Safe to call every run;
    /// never drops or alters existing data.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS daily_stock_data (
                date   TEXT PRIMARY KEY,
                open   REAL,
                high   REAL,
                low    REAL,
                close  REAL,
                volume INTEGER
            )",
        )?;
        Ok(())
    }

    /// Upsert every bar in the payload inside a single transaction.
    ///
    /// Insert-or-replace by date: reloading a date overwrites all five value
    /// columns. All or nothing: if any statement fails the transaction
    /// rolls back and the table keeps its prior contents. Returns the
    /// number of rows written.
    pub fn load(&mut self, payload: &SeriesPayload) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO daily_stock_data
                 (date, open, high, low, close, volume)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (date, bar) in &payload.bars {
                stmt.execute(params![
                    date, bar.open, bar.high, bar.low, bar.close, bar.volume
                ])?;
            }
        }
        tx.commit()?;
        Ok(payload.bars.len())
    }

    /// Number of rows currently stored.
    pub fn bar_count(&self) -> Result<usize, StorageError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM daily_stock_data", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }

    /// Read access for the report queries in this crate.
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
