use crate::error::{InvalidRequest, PipelineError};
use crate::fetch::{self, LogSource};
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::bucket::bucket_label;
use crate::pipeline::constants::{MAX_FETCH_CONCURRENCY, MIN_FETCH_CONCURRENCY};
use crate::pipeline::parse::parse_line;
use crate::pipeline::render::{Report, render_report};
use crate::pipeline::types::{LogRecord, ProcessRequest};
use reqwest::Client;
use std::time::Instant;
use tracing::{info, warn};

/// Reject bad requests before any network or parse work happens.
pub fn validate_request(request: &ProcessRequest) -> Result<(), InvalidRequest> {
    if request.concurrency < MIN_FETCH_CONCURRENCY || request.concurrency > MAX_FETCH_CONCURRENCY {
        return Err(InvalidRequest::ConcurrencyOutOfBounds {
            got: request.concurrency,
        });
    }
    if request.sources.is_empty() {
        return Err(InvalidRequest::NoSources);
    }
    Ok(())
}

/// Run the whole pipeline for one request: fetch every source under the
/// worker budget, then parse, sort, bucket, aggregate and render.
///
/// The sort is a hard barrier: it cannot start until every source has been
/// fetched and parsed, since a late source may hold the earliest timestamps.
pub async fn process_logs(request: &ProcessRequest) -> Result<Report, PipelineError> {
    validate_request(request)?;

    let started = Instant::now();
    info!(
        sources = request.sources.len(),
        concurrency = request.concurrency,
        "pipeline started"
    );

    // Validate every address up front so all bad URLs are named at once.
    let mut sources = Vec::with_capacity(request.sources.len());
    let mut failures = Vec::new();
    for address in &request.sources {
        match LogSource::new(address) {
            Ok(source) => sources.push(source),
            Err(failure) => failures.push(failure),
        }
    }
    if !failures.is_empty() {
        return Err(PipelineError::Fetch { failures });
    }

    let client = Client::new();
    let bodies = fetch::fetch_all(&client, &sources, request.concurrency).await?;

    let mut records: Vec<LogRecord> = Vec::new();
    let mut dropped = 0usize;
    for (source, body) in request.sources.iter().zip(&bodies) {
        for line in body {
            // Blank lines are a splitting artifact, not noise worth logging.
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    warn!(source = source.as_str(), line = %line, "dropping malformed log line");
                }
            }
        }
    }

    // Global ordering barrier. The stable sort keeps equal-timestamp records
    // in source position then intra-source order, which pins the tie-break
    // deterministically.
    records.sort_by_key(|record| record.timestamp_millis);

    let parsed = records.len();
    let table = aggregate(
        records
            .into_iter()
            .map(|record| (bucket_label(record.timestamp_millis), record.message)),
    );
    let report = render_report(&table);

    info!(
        parsed,
        dropped,
        buckets = report.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pipeline finished"
    );

    Ok(report)
}
