use std::collections::BTreeMap;

/// Bucket label -> message text -> occurrence count.
///
/// Ordered maps on both levels, so the double sort the report needs (buckets
/// ascending, messages ascending within a bucket) is structural rather than
/// a post-hoc pass.
pub type AggregationTable = BTreeMap<String, BTreeMap<String, u64>>;

/// Count occurrences of each exact `(bucket, message)` pair. Messages are
/// exact-match keys; two messages differing by any character count apart.
pub fn aggregate(pairs: impl IntoIterator<Item = (String, String)>) -> AggregationTable {
    let mut table = AggregationTable::new();

    for (bucket, message) in pairs {
        *table.entry(bucket).or_default().entry(message).or_insert(0) += 1;
    }

    table
}
