//! Outbound API client.
//!
//! # Design Decisions
//! - Fixed base URL; request paths are joined against it, so the base must
//!   end with a trailing slash to keep its path segment
//! - Cookie store enabled: session credentials ride on every request
//! - Non-success statuses become typed errors carrying the server's
//!   message, so callers get a success/failure notification either way

pub mod api;

pub use api::{ApiClient, ApiError, OnboardingOutcome};
