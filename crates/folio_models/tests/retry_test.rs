//! Tests for the bounded-retry policy.

use folio_error::{GenerationError, GenerationErrorKind};
use folio_models::{RetryConfig, retry_with_backoff};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(4),
        backoff_multiplier: 2.0,
    }
}

fn upstream_failure() -> GenerationError {
    GenerationError::new(GenerationErrorKind::Upstream("service unavailable".to_string()))
}

#[tokio::test]
async fn first_attempt_success_needs_no_retry() {
    let attempts = AtomicUsize::new(0);

    let result = retry_with_backoff(&fast_retry(), || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, GenerationError>("text".to_string()) }
    })
    .await;

    assert_eq!(result.expect("success"), "text");
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn two_failures_then_success_within_budget() {
    let attempts = AtomicUsize::new(0);

    let result = retry_with_backoff(&fast_retry(), || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < 3 {
                Err(upstream_failure())
            } else {
                Ok("generated text".to_string())
            }
        }
    })
    .await;

    assert_eq!(result.expect("third attempt succeeds"), "generated text");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn three_failures_exhaust_the_budget() {
    let attempts = AtomicUsize::new(0);

    let result: Result<String, _> = retry_with_backoff(&fast_retry(), || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(upstream_failure()) }
    })
    .await;

    let err = result.expect_err("exhaustion");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    match err.kind {
        GenerationErrorKind::RetriesExhausted { attempts, ref last } => {
            assert_eq!(attempts, 3);
            assert!(last.contains("service unavailable"));
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_and_blocked_responses_count_as_failures() {
    let attempts = AtomicUsize::new(0);

    let result: Result<String, _> = retry_with_backoff(&fast_retry(), || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            match attempt {
                1 => Err(GenerationError::new(GenerationErrorKind::EmptyResponse)),
                2 => Err(GenerationError::new(GenerationErrorKind::Blocked(
                    "SAFETY".to_string(),
                ))),
                _ => Ok("eventually fine".to_string()),
            }
        }
    })
    .await;

    assert_eq!(result.expect("success after retryable failures"), "eventually fine");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
