use crate::error::PipelineError;
use crate::fetch::{FetchError, LogSource, read_source};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Fetch every source with at most `concurrency` reads in flight, returning
/// the line sets in source order.
///
/// All-or-nothing: if any source fails, the whole request fails and the
/// other results are discarded. In-flight siblings are left to run to
/// completion rather than being cancelled; the budget is capped at 30, so
/// there is nothing worth tearing down early.
pub async fn fetch_all(
    client: &Client,
    sources: &[LogSource],
    concurrency: usize,
) -> Result<Vec<Vec<String>>, PipelineError> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut tasks = JoinSet::new();

    for (slot, source) in sources.iter().enumerate() {
        let client = client.clone();
        let source = source.clone();
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            // Hold the permit for the full network read so at most
            // `concurrency` fetches are ever simultaneously in flight.
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            (slot, read_source(&client, &source).await)
        });
    }

    let mut fetched: Vec<(usize, Vec<String>)> = Vec::with_capacity(sources.len());
    let mut failures: Vec<FetchError> = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        match joined.expect("fetch task panicked") {
            (slot, Ok(lines)) => {
                debug!(slot, lines = lines.len(), "log source fetched");
                fetched.push((slot, lines));
            }
            (slot, Err(failure)) => {
                warn!(slot, url = failure.url(), error = %failure, "log source fetch failed");
                failures.push(failure);
            }
        }
    }

    if !failures.is_empty() {
        // Deterministic error text regardless of completion order.
        failures.sort_by(|a, b| a.url().cmp(b.url()));
        return Err(PipelineError::Fetch { failures });
    }

    // Restore source order; completion order must not leak into the output.
    fetched.sort_by_key(|(slot, _)| *slot);
    Ok(fetched.into_iter().map(|(_, lines)| lines).collect())
}
