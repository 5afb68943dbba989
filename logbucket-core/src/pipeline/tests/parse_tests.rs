use crate::pipeline::parse::parse_line;
use crate::pipeline::types::LogRecord;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_three_fields() {
    assert_eq!(
        parse_line("x 1700000000000 OutOfMemory"),
        Some(LogRecord {
            tag: "x".to_string(),
            timestamp_millis: 1_700_000_000_000,
            message: "OutOfMemory".to_string(),
        })
    );
}

#[test]
fn test_parse_message_keeps_internal_whitespace() {
    let record = parse_line("worker-3 1700000000000 connection reset  by peer").unwrap();
    assert_eq!(record.message, "connection reset  by peer");
}

#[test]
fn test_parse_trims_trailing_whitespace() {
    let record = parse_line("x 1700000000000 OutOfMemory   \t").unwrap();
    assert_eq!(record.message, "OutOfMemory");
}

#[test]
fn test_parse_extra_separators_between_tokens() {
    let record = parse_line("x   1700000000000   NullPointer").unwrap();
    assert_eq!(record.timestamp_millis, 1_700_000_000_000);
    assert_eq!(record.message, "NullPointer");
}

#[test]
fn test_parse_rejects_two_fields() {
    assert_eq!(parse_line("x 1700000000000"), None);
}

#[test]
fn test_parse_rejects_empty_line() {
    assert_eq!(parse_line(""), None);
}

#[test]
fn test_parse_rejects_leading_whitespace_tag() {
    assert_eq!(parse_line(" 1700000000000 OutOfMemory"), None);
}

#[test]
fn test_parse_rejects_non_numeric_timestamp() {
    assert_eq!(parse_line("x not-a-number OutOfMemory"), None);
    assert_eq!(parse_line("x 1700000000.5 OutOfMemory"), None);
}

#[test]
fn test_parse_rejects_negative_timestamp() {
    assert_eq!(parse_line("x -1 OutOfMemory"), None);
}

#[test]
fn test_parse_rejects_whitespace_only_message() {
    assert_eq!(parse_line("x 1700000000000    "), None);
}

#[test]
fn test_parse_zero_timestamp_is_valid() {
    let record = parse_line("epoch 0 boot").unwrap();
    assert_eq!(record.timestamp_millis, 0);
}
