//! Quote provider seam — where series payloads come from.

use thiserror::Error;

use crate::domain::SeriesPayload;

/// Errors a provider can surface while producing a payload.
///
/// Any of these is fatal to a run: nothing downstream executes after a
/// failed fetch.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream source cannot be reached. Raised by remote providers
    /// on network-class failures.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source responded with something that does not parse into a
    /// daily series.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A source of daily series payloads.
///
/// `fetch` is synchronous and attempted once per run; no retry policy
/// lives at this seam. Implementations take their configuration (symbol,
/// endpoint, key) at construction, so the call itself has no inputs and no
/// side effects beyond the fetch.
pub trait QuoteProvider {
    /// Short provider name for user-facing messages.
    fn name(&self) -> &str;

    /// Produce the full daily series payload.
    fn fetch(&self) -> Result<SeriesPayload, SourceError>;
}
