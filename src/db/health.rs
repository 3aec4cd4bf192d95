//! Database handle and readiness probing.

use std::future::Future;

use mongodb::bson::doc;
use mongodb::Client;

/// Something the readiness endpoint can probe.
///
/// Mirrors the bootstrap `Connector` seam: the operational server is
/// generic over its probe, so the ready path is testable without a live
/// database.
pub trait ReadinessProbe {
    /// Error for a failed probe.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform one readiness round trip.
    fn probe(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// The established database connection, owned by application state after
/// bootstrap completes.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
}

impl Database {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ReadinessProbe for Database {
    type Error = mongodb::error::Error;

    fn probe(&self) -> impl Future<Output = Result<(), mongodb::error::Error>> + Send {
        let client = self.client.clone();
        async move {
            client
                .database("admin")
                .run_command(doc! { "ping": 1 })
                .await?;
            Ok(())
        }
    }
}
