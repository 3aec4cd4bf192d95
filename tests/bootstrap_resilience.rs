//! Bootstrap retry contract, exercised through the public API.
//!
//! Runs under Tokio's paused clock so the deployment constants (5 attempts,
//! 5000 ms fixed delay) can be asserted without real waiting.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use lingolink::bootstrap::{establish, Connector, Established, RetryPolicy};
use tokio::time::Instant;

/// Connector that fails a scripted number of times and records when each
/// attempt was made.
struct FlakyDatabase {
    failures_before_success: u32,
    calls: AtomicU32,
    attempt_times: Mutex<Vec<Instant>>,
}

impl FlakyDatabase {
    fn new(failures_before_success: u32) -> Self {
        Self {
            failures_before_success,
            calls: AtomicU32::new(0),
            attempt_times: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn gaps(&self) -> Vec<Duration> {
        let times = self.attempt_times.lock().unwrap();
        times.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

impl Connector for FlakyDatabase {
    type Handle = ();
    type Error = std::io::Error;

    fn connect(&self) -> impl Future<Output = Result<Established<()>, std::io::Error>> + Send {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.attempt_times.lock().unwrap().push(Instant::now());
        let fail = call < self.failures_before_success;

        async move {
            if fail {
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "server selection timed out",
                ))
            } else {
                Ok(Established {
                    handle: (),
                    host: "db.internal:27017".into(),
                })
            }
        }
    }
}

fn deployment_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 5,
        retry_delay: Duration::from_millis(5000),
    }
}

#[tokio::test(start_paused = true)]
async fn recovers_on_fifth_attempt_with_full_delays_between_failures() {
    let database = FlakyDatabase::new(4);
    let start = Instant::now();

    establish(&database, &deployment_policy()).await.unwrap();

    assert_eq!(database.calls(), 5);
    assert!(start.elapsed() >= Duration::from_millis(20_000));

    // Every gap between consecutive attempts honors the fixed delay.
    let gaps = database.gaps();
    assert_eq!(gaps.len(), 4);
    for gap in gaps {
        assert!(gap >= Duration::from_millis(5000));
    }
}

#[tokio::test(start_paused = true)]
async fn exhaustion_stops_at_the_ceiling_and_surfaces_the_last_error() {
    let database = FlakyDatabase::new(u32::MAX);
    let start = Instant::now();

    let err = establish(&database, &deployment_policy())
        .await
        .unwrap_err();

    assert_eq!(database.calls(), 5);
    assert_eq!(err.attempts, 5);
    assert_eq!(err.source.kind(), std::io::ErrorKind::ConnectionRefused);
    // Four gaps, no delay after the final failure.
    assert_eq!(start.elapsed(), Duration::from_millis(20_000));
}

#[tokio::test(start_paused = true)]
async fn first_attempt_success_skips_the_delay_entirely() {
    let database = FlakyDatabase::new(0);
    let start = Instant::now();

    establish(&database, &deployment_policy()).await.unwrap();

    assert_eq!(database.calls(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert!(database.gaps().is_empty());
}
