//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Start metrics exporter
//!     → Bootstrap database (fatal on exhaustion)
//!     → Bind operational server → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → server drains and exits
//!
//! Signals (signals.rs):
//!     SIGTERM / ctrl-c → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal; the process must not serve in
//!   a half-initialized state
//! - Listeners start last, so traffic arrives only when ready

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
