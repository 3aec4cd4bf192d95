//! Startup connection bootstrap subsystem.
//!
//! # State Machine
//! ```text
//! Idle → Attempting (on establish call)
//! Attempting → Connected (attempt succeeds, terminal)
//! Attempting → Attempting (attempt fails, ceiling not reached, after fixed delay)
//! Attempting → Exhausted (attempt fails at the ceiling, terminal)
//! ```
//!
//! # Design Decisions
//! - The retry loop is a pure function over an injected connector and
//!   policy; no module-level state, so it is testable with scripted
//!   failure sequences and tokio's virtual clock
//! - Delay between attempts is fixed, not exponential; the ceiling on
//!   attempts is the only bound
//! - The loop never terminates the process. It returns an error on
//!   exhaustion and the binary entry point decides that error is fatal

pub mod connector;
pub mod engine;
pub mod policy;

pub use connector::{Connector, Established};
pub use engine::{establish, BootstrapError};
pub use policy::RetryPolicy;
