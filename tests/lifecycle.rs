//! End-to-end lifecycle tests: controller wrapping real client calls
//! against a mock backend.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use approval_console::api::{ApiClient, ApiError};
use approval_console::lifecycle::LifecycleController;

mod common;

#[tokio::test]
async fn test_fast_call_settles_cleanly() {
    let addr = common::start_mock_api(|_method, _path, _body| async move {
        (200, r#"{"data":[]}"#.to_string())
    })
    .await;
    let client = ApiClient::new(&common::test_config(addr)).unwrap();

    let mut lifecycle = LifecycleController::new(Duration::from_secs(1));
    let warnings = Arc::new(AtomicU32::new(0));
    let settled = Arc::new(AtomicU32::new(0));

    let w = warnings.clone();
    let s = settled.clone();
    let workflows = lifecycle
        .run(
            client.list_workflows(),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                s.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await
        .unwrap();

    assert!(workflows.is_empty());
    assert_eq!(warnings.load(Ordering::SeqCst), 0);
    assert_eq!(settled.load(Ordering::SeqCst), 1);
    assert!(!lifecycle.attempt().busy());
    assert!(lifecycle.attempt().error().is_none());
}

#[tokio::test]
async fn test_slow_backend_triggers_warning_then_succeeds() {
    let addr = common::start_mock_api(|_method, _path, _body| async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        (200, r#"{"data":[]}"#.to_string())
    })
    .await;
    let client = ApiClient::new(&common::test_config(addr)).unwrap();

    let mut lifecycle = LifecycleController::new(Duration::from_millis(100));
    let warnings = Arc::new(AtomicU32::new(0));

    let w = warnings.clone();
    let result = lifecycle
        .run(
            client.list_workflows(),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
    assert!(!lifecycle.attempt().slow_warning_active());
}

#[tokio::test]
async fn test_server_failure_records_classified_message() {
    let addr = common::start_mock_api(|_method, _path, _body| async move {
        (400, r#"{"message": "Invalid name"}"#.to_string())
    })
    .await;
    let client = ApiClient::new(&common::test_config(addr)).unwrap();

    let mut lifecycle = LifecycleController::new(Duration::from_secs(1));
    let settled = Arc::new(AtomicU32::new(0));

    let s = settled.clone();
    let err = lifecycle
        .run(client.list_workflows(), || {}, move || {
            s.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid name");
    assert_eq!(settled.load(Ordering::SeqCst), 1);
    assert!(!lifecycle.attempt().busy());
    assert_eq!(lifecycle.attempt().error(), Some("Invalid name"));
}

#[tokio::test]
async fn test_network_failure_settles_with_connectivity_message() {
    let addr = common::unreachable_addr().await;
    let client = ApiClient::new(&common::test_config(addr)).unwrap();

    let mut lifecycle = LifecycleController::new(Duration::from_secs(1));
    let settled = Arc::new(AtomicU32::new(0));

    let s = settled.clone();
    let err = lifecycle
        .run(client.pending_approvals(), || {}, move || {
            s.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network));
    assert_eq!(settled.load(Ordering::SeqCst), 1);
    assert!(lifecycle
        .attempt()
        .error()
        .unwrap()
        .contains("internet connection"));
}

#[tokio::test]
async fn test_sequential_attempts_reuse_controller() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_mock_api(move |_method, _path, _body| {
        let c = c.clone();
        async move {
            if c.fetch_add(1, Ordering::SeqCst) == 0 {
                (500, "{}".to_string())
            } else {
                (200, r#"{"data":[]}"#.to_string())
            }
        }
    })
    .await;
    let client = ApiClient::new(&common::test_config(addr)).unwrap();

    let mut lifecycle = LifecycleController::new(Duration::from_secs(1));

    let err = lifecycle
        .run(client.list_workflows(), || {}, || {})
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Server error: 500");
    assert_eq!(lifecycle.attempt().error(), Some("Server error: 500"));

    // The retry is a fresh attempt; the stale message must be gone.
    let workflows = lifecycle
        .run(client.list_workflows(), || {}, || {})
        .await
        .unwrap();
    assert!(workflows.is_empty());
    assert!(lifecycle.attempt().error().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
