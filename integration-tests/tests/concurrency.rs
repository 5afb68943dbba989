use integration_tests::harness::{
    ConcurrencyProbe, UpstreamOptions, init_test_tracing, start_upstream_with,
};
use logbucket_core::pipeline::process_logs;
use logbucket_core::pipeline::types::ProcessRequest;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn request(concurrency: usize, sources: Vec<String>) -> ProcessRequest {
    ProcessRequest {
        concurrency,
        sources,
    }
}

fn slow_sources(count: usize, delay: Duration, probe: &ConcurrencyProbe) -> Vec<String> {
    (0..count)
        .map(|i| {
            start_upstream_with(UpstreamOptions {
                body: format!("src{i} 1700000000000 Error{i}"),
                delay,
                probe: Some(probe.clone()),
                ..Default::default()
            })
        })
        .collect()
}

#[tokio::test]
async fn test_budget_is_a_true_upper_bound_on_in_flight_fetches() {
    init_test_tracing();
    let probe = ConcurrencyProbe::new();
    let sources = slow_sources(6, Duration::from_millis(200), &probe);

    let report = process_logs(&request(2, sources)).await.unwrap();

    assert!(
        probe.peak() <= 2,
        "observed {} simultaneous fetches with a budget of 2",
        probe.peak()
    );
    // With six 200ms sources and two workers, the budget is actually used.
    assert_eq!(probe.peak(), 2);

    // All six sources made it into the report.
    let total: u64 = report
        .iter()
        .flat_map(|b| b.logs.iter())
        .map(|l| l.count)
        .sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn test_budget_bounds_one_and_thirty_both_succeed() {
    init_test_tracing();
    let probe = ConcurrencyProbe::new();
    let sources = slow_sources(3, Duration::from_millis(20), &probe);

    let report = process_logs(&request(1, sources.clone())).await.unwrap();
    assert!(!report.is_empty());
    assert!(probe.peak() <= 1);

    let report = process_logs(&request(30, sources)).await.unwrap();
    assert!(!report.is_empty());
}

#[tokio::test]
async fn test_report_invariant_to_fetch_completion_order() {
    init_test_tracing();
    let body_a = "x 1700000000000 OutOfMemory\nx 1700000040000 OutOfMemory";
    let body_b = "y 1699999260000 NullPointer\ny 1700000100000 Timeout";

    // First run: source A is slow, B finishes first.
    let slow_a = start_upstream_with(UpstreamOptions {
        body: body_a.to_string(),
        delay: Duration::from_millis(200),
        ..Default::default()
    });
    let fast_b = start_upstream_with(UpstreamOptions {
        body: body_b.to_string(),
        ..Default::default()
    });
    let first = process_logs(&request(2, vec![slow_a, fast_b])).await.unwrap();

    // Second run: same content, delays swapped.
    let fast_a = start_upstream_with(UpstreamOptions {
        body: body_a.to_string(),
        ..Default::default()
    });
    let slow_b = start_upstream_with(UpstreamOptions {
        body: body_b.to_string(),
        delay: Duration::from_millis(200),
        ..Default::default()
    });
    let second = process_logs(&request(2, vec![fast_a, slow_b])).await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
