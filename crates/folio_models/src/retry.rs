//! Bounded retry with exponential backoff for generation calls.

use folio_error::{GenerationError, GenerationErrorKind};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Retry configuration for generation attempts.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, the first one included.
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(4),
            max_backoff: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

/// Retries a generation operation with exponential backoff.
///
/// Runs the operation up to `config.max_attempts` times, sleeping between
/// attempts. On exhaustion the last underlying failure is wrapped in a
/// [`GenerationErrorKind::RetriesExhausted`] error; the loop never retries
/// indefinitely.
#[instrument(skip(operation))]
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, GenerationError>>,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing generation attempt");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Generation succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if attempt >= config.max_attempts {
                    warn!(attempt, error = %err, "All generation attempts exhausted");
                    return Err(GenerationError::new(
                        GenerationErrorKind::RetriesExhausted {
                            attempts: attempt,
                            last: err.to_string(),
                        },
                    ));
                }

                if !err.is_retryable() {
                    warn!(error = %err, "Error is not retryable, failing immediately");
                    return Err(err);
                }

                debug!(
                    backoff_ms = backoff.as_millis(),
                    error = %err,
                    "Retrying after failure"
                );
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * config.backoff_multiplier),
                    config.max_backoff,
                );
            }
        }
    }
}
