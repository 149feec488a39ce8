//! Domain types for BarVault

pub mod bar;
pub mod series;

pub use bar::DailyBar;
pub use series::{SeriesMeta, SeriesPayload};
