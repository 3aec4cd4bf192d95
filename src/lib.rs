//! lingolink backend service
//!
//! Backend for a language-learning social application, built with Tokio
//! and Axum. The heart of the crate is the startup bootstrap: a bounded,
//! fixed-delay retry loop that establishes the MongoDB connection before
//! anything serves traffic, and whose exhaustion is fatal to the process.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                LINGOLINK BACKEND                │
//!                  │                                                │
//!   MONGO_URI ────▶│  ┌─────────┐   ┌───────────┐   ┌───────────┐  │
//!   config file ──▶│  │ config  │──▶│ bootstrap │──▶│    db     │──┼──▶ MongoDB
//!                  │  └─────────┘   │ (retry ×5)│   │ connector │  │
//!                  │                └─────┬─────┘   └─────┬─────┘  │
//!                  │              exhausted│               │handle  │
//!                  │                      ▼               ▼        │
//!                  │               process exit    ┌───────────┐   │
//!   /healthz ─────▶│                               │   http    │   │
//!   /readyz  ─────▶│                               │ (ops only)│   │
//!                  │                               └───────────┘   │
//!                  │  ┌────────────────────────────────────────┐   │
//!                  │  │         Cross-Cutting Concerns          │   │
//!                  │  │  ┌───────────────┐  ┌───────────────┐   │   │
//!                  │  │  │ observability │  │   lifecycle   │   │   │
//!                  │  │  │ logs/metrics  │  │ startup/stop  │   │   │
//!                  │  │  └───────────────┘  └───────────────┘   │   │
//!                  │  └────────────────────────────────────────┘   │
//!                  └────────────────────────────────────────────────┘
//!
//!   client (ApiClient) ──▶ fixed base URL, cookies on every request
//! ```

// Core subsystems
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod http;

// API boundary
pub mod client;
pub mod model;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use bootstrap::{establish, BootstrapError, Connector, Established, RetryPolicy};
pub use config::AppConfig;
pub use db::{Database, MongoConnector, ReadinessProbe};
pub use http::OperationalServer;
pub use lifecycle::Shutdown;
