use crate::pipeline::constants::BUCKET_MINUTES;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Label of the 15-minute UTC window containing `timestamp_millis`, one of
/// 96 fixed `"HH:MM-HH:MM"` values per day.
///
/// Epoch milliseconds are UTC by definition, so the wall-clock minute falls
/// out of plain integer arithmetic. The window start is the minute floored
/// to {0,15,30,45}; the upper bound wraps, so the last window of the day is
/// `"23:45-00:00"`.
pub fn bucket_label(timestamp_millis: i64) -> String {
    let minute_of_day = (timestamp_millis / 60_000).rem_euclid(MINUTES_PER_DAY);
    let start = minute_of_day - minute_of_day % BUCKET_MINUTES;
    let end = (start + BUCKET_MINUTES) % MINUTES_PER_DAY;

    format!(
        "{:02}:{:02}-{:02}:{:02}",
        start / 60,
        start % 60,
        end / 60,
        end % 60
    )
}
