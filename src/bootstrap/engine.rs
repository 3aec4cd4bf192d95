//! The bootstrap retry loop.

use thiserror::Error;

use crate::bootstrap::connector::Connector;
use crate::bootstrap::policy::RetryPolicy;
use crate::observability::metrics;

/// All attempts failed; the service cannot run without this connection.
///
/// The binary entry point is expected to treat this as fatal and exit with
/// a non-zero status. The loop itself never terminates the process.
#[derive(Debug, Error)]
#[error("database connection failed after {attempts} attempts: {source}")]
pub struct BootstrapError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Total attempts made (equals the policy ceiling).
    pub attempts: u32,

    /// Error from the final attempt.
    #[source]
    pub source: E,
}

/// Establish a connection, retrying transient failures up to the ceiling.
///
/// Attempts are numbered 1-based in logs. On success the connected host is
/// logged and the handle returned; no further attempts are made. Between
/// failed attempts the task suspends cooperatively for the policy's fixed
/// delay. After the final failed attempt the error is returned immediately,
/// without a trailing delay.
pub async fn establish<C: Connector>(
    connector: &C,
    policy: &RetryPolicy,
) -> Result<C::Handle, BootstrapError<C::Error>> {
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match connector.connect().await {
            Ok(established) => {
                metrics::record_bootstrap_attempt(true);
                tracing::info!(
                    host = %established.host,
                    attempt,
                    "Database connected"
                );
                return Ok(established.handle);
            }
            Err(error) => {
                metrics::record_bootstrap_attempt(false);
                tracing::error!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %error,
                    "Database connection failed"
                );

                if attempt >= policy.max_attempts {
                    return Err(BootstrapError {
                        attempts: attempt,
                        source: error,
                    });
                }

                tracing::info!(
                    delay_ms = policy.retry_delay.as_millis() as u64,
                    "Retrying after delay"
                );
                tokio::time::sleep(policy.retry_delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::connector::Established;
    use std::future::Future;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    /// Connector that fails a scripted number of times, then succeeds.
    struct Scripted {
        failures_before_success: u32,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(failures_before_success: u32) -> Self {
            Self {
                failures_before_success,
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Connector for Scripted {
        type Handle = ();
        type Error = std::io::Error;

        fn connect(
            &self,
        ) -> impl Future<Output = Result<Established<()>, std::io::Error>> + Send {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = call < self.failures_before_success;
            async move {
                if fail {
                    Err(std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    ))
                } else {
                    Ok(Established {
                        handle: (),
                        host: "localhost:27017".into(),
                    })
                }
            }
        }
    }

    fn policy(max_attempts: u32, delay_ms: u64) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            retry_delay: Duration::from_millis(delay_ms),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_makes_one_attempt_and_no_delay() {
        let connector = Scripted::new(0);
        let start = Instant::now();

        establish(&connector, &policy(5, 5000)).await.unwrap();

        assert_eq!(connector.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_n_failures_with_exactly_n_plus_one_attempts() {
        for failures in 1..5u32 {
            let connector = Scripted::new(failures);
            establish(&connector, &policy(5, 5000)).await.unwrap();
            assert_eq!(connector.calls(), failures + 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn four_failures_then_success_waits_at_least_twenty_seconds() {
        let connector = Scripted::new(4);
        let start = Instant::now();

        establish(&connector, &policy(5, 5000)).await.unwrap();

        assert_eq!(connector.calls(), 5);
        assert!(start.elapsed() >= Duration::from_millis(20_000));
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_makes_exactly_max_attempts_and_no_more() {
        let connector = Scripted::new(u32::MAX);
        let start = Instant::now();

        let err = establish(&connector, &policy(5, 5000)).await.unwrap_err();

        assert_eq!(err.attempts, 5);
        assert_eq!(connector.calls(), 5);
        // Four gaps between five attempts; no delay after the last failure.
        assert_eq!(start.elapsed(), Duration::from_millis(20_000));
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_policy_fails_without_sleeping() {
        let connector = Scripted::new(u32::MAX);
        let start = Instant::now();

        let err = establish(&connector, &policy(1, 5000)).await.unwrap_err();

        assert_eq!(err.attempts, 1);
        assert_eq!(connector.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_error_mentions_attempt_total() {
        let connector = Scripted::new(u32::MAX);
        let err = establish(&connector, &policy(3, 10)).await.unwrap_err();
        assert!(err.to_string().contains("after 3 attempts"));
    }
}
