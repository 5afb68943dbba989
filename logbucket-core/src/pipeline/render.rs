use crate::pipeline::aggregate::AggregationTable;
use serde::Serialize;

/// One `(message, count)` entry within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageCount {
    pub exception: String,
    pub count: u64,
}

/// All message counts for one 15-minute window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    pub timestamp: String,
    pub logs: Vec<MessageCount>,
}

pub type Report = Vec<BucketSummary>;

/// Render the table into the wire shape.
///
/// Walking the ordered maps gives buckets ascending by label (chronological,
/// given the zero-padded format) and messages ascending within each bucket,
/// which makes the report byte-for-byte deterministic across runs.
pub fn render_report(table: &AggregationTable) -> Report {
    table
        .iter()
        .map(|(bucket, messages)| BucketSummary {
            timestamp: bucket.clone(),
            logs: messages
                .iter()
                .map(|(message, count)| MessageCount {
                    exception: message.clone(),
                    count: *count,
                })
                .collect(),
        })
        .collect()
}
