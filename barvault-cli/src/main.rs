//! BarVault CLI — fetch, store, and report daily stock data.
//!
//! Commands:
//! - `run` — fetch the daily series, load it into the store, print the report
//! - `fetch` — fetch and load only
//! - `report` — print the statistics report for an existing store
//!
//! Running with no arguments is the same as `run` with the default store
//! path. Exit status is 0 on success and non-zero on any failure.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use barvault_core::report::MarketStats;
use barvault_core::source::{QuoteProvider, SampleProvider};
use barvault_core::store::BarStore;

const DEFAULT_DB: &str = "stock_data.db";

#[derive(Parser)]
#[command(
    name = "barvault",
    about = "BarVault — daily OHLCV snapshot store and market statistics"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the daily series, load it into the store, and print the report.
    Run {
        /// Store path.
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
    /// Fetch the daily series and load it into the store without reporting.
    Fetch {
        /// Store path.
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
    /// Print the statistics report for an existing store.
    Report {
        /// Store path.
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run {
        db: PathBuf::from(DEFAULT_DB),
    }) {
        Commands::Run { db } => {
            fetch_and_store(&db)?;
            println!();
            print_report(&db)
        }
        Commands::Fetch { db } => fetch_and_store(&db),
        Commands::Report { db } => print_report(&db),
    }
}

fn fetch_and_store(db: &Path) -> Result<()> {
    let provider = SampleProvider::new();
    let payload = provider.fetch()?;
    println!(
        "Fetched {} bars for {} from the {} provider (last refreshed {})",
        payload.len(),
        payload.meta.symbol,
        provider.name(),
        payload.meta.last_refreshed
    );

    let mut store = BarStore::open(db)?;
    store.ensure_schema()?;
    let written = store.load(&payload)?;
    println!("Stored {written} bars in {}", db.display());

    Ok(())
}

fn print_report(db: &Path) -> Result<()> {
    let store = BarStore::open(db)?;
    store.ensure_schema()?;

    let stats = MarketStats::compute(&store)?;
    print!("{}", stats.render());

    Ok(())
}
