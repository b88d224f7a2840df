//! Bounded retry with exponential backoff.

use crate::CompletionMetrics;
use fabula_error::{ProviderError, ProviderErrorKind, ProviderResult, RetryableError};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// Delays slept between `attempts` tries: `base_delay * 2^i` for each gap.
///
/// Nothing is slept after the final attempt, so the schedule has one entry
/// fewer than the attempt count.
///
/// # Examples
///
/// ```
/// use fabula_models::backoff_schedule;
/// use std::time::Duration;
///
/// let schedule = backoff_schedule(Duration::from_secs(2), 3);
/// assert_eq!(schedule, vec![Duration::from_secs(2), Duration::from_secs(4)]);
/// assert!(backoff_schedule(Duration::from_secs(2), 1).is_empty());
/// ```
pub fn backoff_schedule(base_delay: Duration, attempts: usize) -> Vec<Duration> {
    (0..attempts.saturating_sub(1))
        .map(|i| {
            let factor = 2u32.saturating_pow(u32::try_from(i).unwrap_or(u32::MAX));
            base_delay.saturating_mul(factor)
        })
        .collect()
}

/// Run `operation` until it succeeds, fails permanently or the schedule
/// runs out.
///
/// Retryable errors that outlive the schedule become
/// `ProviderErrorKind::Unavailable` carrying the attempt count and the last
/// underlying error. Permanent errors are returned unchanged after the first
/// occurrence.
pub async fn with_retry<T, F, Fut>(
    provider: &'static str,
    schedule: Vec<Duration>,
    mut operation: F,
) -> ProviderResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProviderResult<T>>,
{
    let max_attempts = schedule.len() + 1;
    let attempts = AtomicUsize::new(0);

    let result = Retry::spawn(schedule, || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let call = operation();
        async move {
            match call.await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    if attempt < max_attempts {
                        warn!(
                            provider,
                            attempt,
                            max_attempts,
                            error = %e.kind,
                            "Transient completion failure, will retry"
                        );
                        CompletionMetrics::get().record_retry(provider, e.kind.label());
                    }
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(provider, attempt, error = %e.kind, "Permanent completion failure");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await;

    match result {
        Ok(value) => Ok(value),
        Err(e) if e.is_retryable() => Err(ProviderError::new(ProviderErrorKind::Unavailable {
            attempts: attempts.load(Ordering::SeqCst),
            last_error: e.kind.to_string(),
        })),
        Err(e) => Err(e),
    }
}
