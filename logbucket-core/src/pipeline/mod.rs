//! Log aggregation pipeline
//!
//! Takes a set of remote log files, merges them into one chronological
//! stream and counts how often each distinct message appears within each
//! 15-minute window of the UTC day.
//!
//! The overall data flow is:
//!
//! fetch_all (the only concurrent stage)
//! parse_line
//! LogRecord (sorted by timestamp)
//! bucket_label
//! AggregationTable
//! Report
//!
//! Everything after the fetch runs single-threaded on the pooled lines; the
//! sort is a hard barrier, because a global ordering cannot be established
//! until the last source has landed.

pub mod aggregate;
pub mod bucket;
pub mod constants;
pub mod parse;
pub mod render;
mod run;
pub mod types;

#[cfg(test)]
mod tests;

pub use run::{process_logs, validate_request};
