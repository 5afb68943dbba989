use std::time::Duration;

/// Per-source network read timeout. Not caller-configurable.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Inclusive bounds on the caller-supplied fetch budget.
pub const MIN_FETCH_CONCURRENCY: usize = 1;
pub const MAX_FETCH_CONCURRENCY: usize = 30;

/// Width of one aggregation window, in minutes of the UTC day.
pub const BUCKET_MINUTES: i64 = 15;
