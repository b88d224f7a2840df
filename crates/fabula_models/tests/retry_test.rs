//! Retry schedule and classification tests without a network.

use fabula_error::{ProviderError, ProviderErrorKind};
use fabula_models::{backoff_schedule, with_retry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[test]
fn test_schedule_doubles_from_base() {
    let schedule = backoff_schedule(Duration::from_millis(500), 4);
    assert_eq!(
        schedule,
        vec![
            Duration::from_millis(500),
            Duration::from_millis(1000),
            Duration::from_millis(2000),
        ]
    );
}

#[test]
fn test_schedule_for_zero_attempts_is_empty() {
    assert!(backoff_schedule(Duration::from_secs(1), 0).is_empty());
}

#[tokio::test]
async fn test_timeouts_exhaust_into_unavailable() {
    let calls = AtomicUsize::new(0);

    let result: Result<String, _> = with_retry(
        "zello",
        backoff_schedule(Duration::from_millis(1), 3),
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(ProviderError::new(ProviderErrorKind::Timeout(
                    "read timed out".to_string(),
                )))
            }
        },
    )
    .await;

    let err = result.expect_err("every call times out");
    match err.kind() {
        ProviderErrorKind::Unavailable {
            attempts,
            last_error,
        } => {
            assert_eq!(*attempts, 3);
            assert!(last_error.contains("read timed out"));
        }
        other => panic!("expected Unavailable, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_parse_error_is_not_retried() {
    let calls = AtomicUsize::new(0);

    let result: Result<String, _> = with_retry(
        "openai",
        backoff_schedule(Duration::from_millis(1), 3),
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(ProviderError::new(ProviderErrorKind::Parse("bad".to_string()))) }
        },
    )
    .await;

    assert!(matches!(
        result.expect_err("parse errors are permanent").kind(),
        ProviderErrorKind::Parse(_)
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_success_after_transport_fault() -> anyhow::Result<()> {
    let calls = AtomicUsize::new(0);

    let text = with_retry(
        "zello",
        backoff_schedule(Duration::from_millis(1), 3),
        || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 0 {
                    Err(ProviderError::new(ProviderErrorKind::Transport(
                        "connection reset".to_string(),
                    )))
                } else {
                    Ok("texto".to_string())
                }
            }
        },
    )
    .await?;

    assert_eq!(text, "texto");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}
