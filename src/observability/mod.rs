//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging with per-field context, one line per event
//! - Metrics are cheap (atomic increments) and safe to call before the
//!   exporter is installed (they become no-ops)

pub mod logging;
pub mod metrics;
