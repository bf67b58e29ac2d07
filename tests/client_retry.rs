//! Per-item retry behavior and its tracing events.
//!
//! Run with: `cargo test --test client_retry`

mod common;

use common::*;
use quicksnmp::{Client, Error, ErrorStatus, MockBackend, MockReply, Response, RetryPolicy, VarBind};
use tracing::Level;

fn sys_name_reply() -> Response {
    Response::ok(vec![VarBind::new(SYS_NAME, "core-sw-01")])
}

fn retry_warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|e| e.target == "quicksnmp::fetch" && e.level == Some(Level::WARN))
        .collect()
}

#[test]
fn test_two_failures_then_success() {
    let mock = MockBackend::new();
    mock.queue_script([timed_out(), timed_out(), sys_name_reply()]);

    let (result, events) =
        capture_events(|| quicksnmp::get(&mock, "device1", [SYS_NAME], &public()));

    let row = result.unwrap();
    assert_eq!(row.get(SYS_NAME).and_then(|v| v.as_str()), Some("core-sw-01"));
    assert_eq!(mock.pulls(), 3);

    let warnings = retry_warnings(&events);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].field("attempt"), Some("1"));
    assert_eq!(warnings[1].field("attempt"), Some("2"));
    assert_eq!(warnings[0].field("indication"), Some("requestTimedOut"));
    assert_eq!(warnings[0].field("item"), Some("0"));
}

#[test]
fn test_three_failures_fail_the_call() {
    let mock = MockBackend::new();
    mock.queue_script([
        timed_out(),
        timed_out(),
        timed_out(),
        // Never reached
        sys_name_reply(),
    ]);

    let (result, events) =
        capture_events(|| quicksnmp::get(&mock, "device1", [SYS_NAME], &public()));

    match result.unwrap_err() {
        Error::Protocol {
            indication,
            attempts,
            ..
        } => {
            assert_eq!(indication.as_deref(), Some("requestTimedOut"));
            assert_eq!(attempts, 3);
        }
        other => panic!("expected Protocol error, got {:?}", other),
    }
    assert_eq!(mock.pulls(), 3);
    assert_eq!(mock.dispatches().len(), 1);

    // The third failure is terminal, not a retry
    assert_eq!(retry_warnings(&events).len(), 2);
    assert!(events.iter().any(|e| e.target == "quicksnmp::fetch"
        && e.level == Some(Level::DEBUG)
        && e.field("attempts") == Some("3")));
}

#[test]
fn test_failure_budget_is_per_item() {
    let mock = MockBackend::new();
    // Two failures before each of three rows: six failures total, never
    // three in a row for one item
    mock.queue_script([
        timed_out(),
        timed_out(),
        if_row(1, "lo", 0),
        timed_out(),
        timed_out(),
        if_row(2, "eth0", 0),
        timed_out(),
        timed_out(),
        if_row(3, "eth1", 0),
    ]);

    let (result, events) = capture_events(|| {
        quicksnmp::get_bulk(&mock, "device1", [IF_DESCR], &public(), 3, 0)
    });

    assert_eq!(result.unwrap().len(), 3);
    assert_eq!(mock.pulls(), 9);

    let items: Vec<_> = retry_warnings(&events)
        .iter()
        .map(|e| e.field("item").unwrap_or_default().to_string())
        .collect();
    assert_eq!(items, ["0", "0", "1", "1", "2", "2"]);
}

#[test]
fn test_error_status_alone_is_retried() {
    let mock = MockBackend::new();
    mock.queue_script([
        Response::status(ErrorStatus::GenErr, 0),
        sys_name_reply(),
    ]);

    let (result, events) =
        capture_events(|| quicksnmp::get(&mock, "device1", [SYS_NAME], &public()));

    assert!(result.is_ok());
    let warnings = retry_warnings(&events);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("status"), Some("genErr"));
}

#[test]
fn test_error_index_alone_is_retried() {
    let mock = MockBackend::new();
    mock.queue_script([
        Response {
            error_index: 2,
            ..Response::default()
        },
        sys_name_reply(),
    ]);

    quicksnmp::get(&mock, "device1", [SYS_NAME], &public()).unwrap();

    assert_eq!(mock.pulls(), 2);
}

#[test]
fn test_custom_retry_limit() {
    let mock = MockBackend::new();
    mock.queue_script([timed_out(), timed_out(), timed_out(), timed_out(), sys_name_reply()]);

    let mut client = Client::builder(mock.clone()).retry_limit(5).build();
    let row = client.get("device1", [SYS_NAME], &public()).unwrap();

    assert!(row.contains_key(SYS_NAME));
    assert_eq!(mock.pulls(), 5);
}

#[test]
fn test_retry_once_fails_immediately() {
    let mock = MockBackend::new();
    mock.queue_script([timed_out(), sys_name_reply()]);

    let mut client = Client::builder(mock.clone())
        .retry(RetryPolicy::once())
        .build();
    let (result, events) = capture_events(|| client.get("device1", [SYS_NAME], &public()));

    assert!(matches!(result, Err(Error::Protocol { attempts: 1, .. })));
    assert_eq!(mock.pulls(), 1);
    assert!(retry_warnings(&events).is_empty());
}

#[test]
fn test_backend_error_is_not_retried() {
    let mock = MockBackend::new();
    mock.queue_script([
        MockReply::Error("engine discovery failed".into()),
        MockReply::from(sys_name_reply()),
    ]);

    let (result, events) =
        capture_events(|| quicksnmp::get(&mock, "device1", [SYS_NAME], &public()));

    assert!(result.unwrap_err().is_backend());
    assert_eq!(mock.pulls(), 1);
    assert!(retry_warnings(&events).is_empty());
}

#[test]
fn test_dispatch_logged_at_debug() {
    let mock = MockBackend::new();
    mock.queue_response(sys_name_reply());

    let (_, events) =
        capture_events(|| quicksnmp::get(&mock, ("device1", 1161), [SYS_NAME], &public()));

    let dispatch = events
        .iter()
        .find(|e| e.target == "quicksnmp::client")
        .expect("dispatch event");
    assert_eq!(dispatch.level, Some(Level::DEBUG));
    assert_eq!(dispatch.field("peer"), Some("device1:1161"));
    assert_eq!(dispatch.field("pdu_type"), Some("GetRequest"));
    assert_eq!(dispatch.field("expected"), Some("1"));
}
