//! Quote providers and response parsing

pub mod envelope;
pub mod provider;
pub mod sample;

pub use envelope::parse_daily_response;
pub use provider::{QuoteProvider, SourceError};
pub use sample::SampleProvider;
