//! MongoDB connectivity.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     MongoConnector (connector.rs)
//!     → bootstrap::establish drives it with the retry policy
//!     → Database handle (health.rs), owned by application state
//!
//! Runtime:
//!     /readyz → ReadinessProbe::probe → ping round trip
//! ```
//!
//! # Design Decisions
//! - Each connection attempt issues a ping so the lazily-connecting driver
//!   reports unavailability at bootstrap time, not on first query
//! - Per-attempt timeout comes from config, bounding every attempt

pub mod connector;
pub mod health;

pub use connector::MongoConnector;
pub use health::{Database, ReadinessProbe};
