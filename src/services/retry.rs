use crate::services::errors::FetchError;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    /// Multiplier applied to `delay` after every failed attempt
    pub backoff: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
            backoff: 2.0,
        }
    }
}

/// Runs `f` until it succeeds or `max_attempts` attempts have failed.
///
/// No sleep happens after the final attempt. A policy with zero attempts
/// still runs `f` once.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    operation: &'static str,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut delay = policy.delay;
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(operation, attempt, error = %err, "attempt failed");
                last_error = err.to_string();

                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                    delay = delay.mul_f64(policy.backoff);
                }
            }
        }
    }

    Err(FetchError::Exhausted {
        operation,
        attempts,
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::from_millis(1),
            backoff: 2.0,
        }
    }

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicU32::new(0);

        let result = retry_with_backoff(&fast_policy(5), "read value", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(format!("failure {n}"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);

        let result: Result<(), FetchError> =
            retry_with_backoff(&fast_policy(3), "fetch name", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>("execution reverted") }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(FetchError::Exhausted {
                operation,
                attempts,
                last_error,
            }) => {
                assert_eq!(operation, "fetch name");
                assert_eq!(attempts, 3);
                assert_eq!(last_error, "execution reverted");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);

        let _ = retry_with_backoff(&fast_policy(0), "fetch symbol", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>("timeout") }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn default_policy_matches_rpc_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.backoff, 2.0);
    }
}
