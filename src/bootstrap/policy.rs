//! Retry policy for the startup bootstrap.

use std::time::Duration;

use crate::config::DatabaseConfig;

/// Bounded fixed-delay retry policy.
///
/// `max_attempts` counts total attempts, not retries: a policy of 5 makes
/// at most 5 connection attempts with 4 delays between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum total connection attempts (≥ 1).
    pub max_attempts: u32,

    /// Fixed delay between failed attempts.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_millis(5000),
        }
    }
}

impl RetryPolicy {
    /// Derive the policy from database configuration.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay(),
        }
    }
}
