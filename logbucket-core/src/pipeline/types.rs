use serde::Deserialize;

/// One successfully parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub tag: String,
    /// Epoch milliseconds, UTC. Never negative.
    pub timestamp_millis: i64,
    pub message: String,
}

/// The caller's request: a worker budget and the log files to merge.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub concurrency: usize,
    pub sources: Vec<String>,
}
