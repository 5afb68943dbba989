use crate::pipeline::types::LogRecord;

/// Best-effort decode of one raw line into a `LogRecord`.
///
/// Expected shape is `<tag> <timestampMillis> <message...>`: three or more
/// whitespace-separated tokens, where the message is everything after the
/// second token, kept verbatim apart from surrounding whitespace. Lines that
/// do not decompose, or whose timestamp is not a non-negative integer, yield
/// `None`; malformed lines are expected noise in heterogeneous sources and
/// must never abort the batch.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let (tag, rest) = line.split_once(char::is_whitespace)?;
    if tag.is_empty() {
        return None;
    }

    let (timestamp, message) = rest.trim_start().split_once(char::is_whitespace)?;
    let timestamp_millis = timestamp.parse::<i64>().ok().filter(|ms| *ms >= 0)?;

    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    Some(LogRecord {
        tag: tag.to_string(),
        timestamp_millis,
        message: message.to_string(),
    })
}
