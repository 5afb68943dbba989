use crate::fetch::FetchError;
use crate::pipeline::constants::{MAX_FETCH_CONCURRENCY, MIN_FETCH_CONCURRENCY};

/// Caller-fault request rejection. Surfaced before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum InvalidRequest {
    #[error(
        "fetch concurrency out of bounds: {got} (must be between {MIN_FETCH_CONCURRENCY} and {MAX_FETCH_CONCURRENCY})"
    )]
    ConcurrencyOutOfBounds { got: usize },

    #[error("no log sources provided")]
    NoSources,
}

/// Request-level failure of a pipeline run. Either the request never started
/// (validation) or one or more sources could not be fetched; a partial report
/// is never produced.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("{} log source(s) failed: {}", .failures.len(), summarize(.failures))]
    Fetch { failures: Vec<FetchError> },
}

fn summarize(failures: &[FetchError]) -> String {
    failures
        .iter()
        .map(FetchError::url)
        .collect::<Vec<_>>()
        .join(", ")
}
