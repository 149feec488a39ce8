//! BarVault Core — daily OHLCV ingestion, SQLite persistence, and market statistics.
//!
//! This crate contains the heart of the snapshot pipeline:
//! - Domain types (daily bars, series payloads)
//! - Quote providers behind a trait seam (sample series in this build)
//! - SQLite-backed bar store with transactional upsert loading
//! - Nine-statistic descriptive report over the stored rows
//!
//! Data flows one way: provider → store → report. Everything is synchronous
//! and single-threaded; the store assumes a single writer and a single reader.

pub mod domain;
pub mod report;
pub mod source;
pub mod store;
