//! Operational HTTP surface.
//!
//! # Data Flow
//! ```text
//! GET /healthz → liveness (200 once the server is up)
//! GET /readyz  → readiness (ping database, 200 ready / 503 unready)
//! ```
//!
//! # Design Decisions
//! - This surface exists for orchestrators and operators only; the
//!   application's REST API is not served here
//! - Request ID added as early as possible for log correlation
//! - The server binds only after bootstrap succeeds, so liveness implies
//!   the database handshake completed at least once

pub mod request;
pub mod server;

pub use server::{AppState, OperationalServer};
