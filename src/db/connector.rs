//! MongoDB implementation of the bootstrap connector.

use std::future::Future;
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::bootstrap::{Connector, Established};
use crate::config::DatabaseConfig;

/// Connector that opens a MongoDB client and verifies it with a ping.
#[derive(Debug, Clone)]
pub struct MongoConnector {
    uri: String,
    connect_timeout: Duration,
}

impl MongoConnector {
    pub fn new(uri: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            uri: uri.into(),
            connect_timeout,
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(config.uri.clone(), config.connect_timeout())
    }
}

impl Connector for MongoConnector {
    type Handle = Client;
    type Error = mongodb::error::Error;

    fn connect(
        &self,
    ) -> impl Future<Output = Result<Established<Client>, mongodb::error::Error>> + Send {
        let uri = self.uri.clone();
        let timeout = self.connect_timeout;

        async move {
            let mut options = ClientOptions::parse(&uri).await?;
            options.server_selection_timeout = Some(timeout);
            options.connect_timeout = Some(timeout);

            let host = options
                .hosts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");

            let client = Client::with_options(options)?;

            // The driver connects lazily; ping forces a real round trip so
            // this attempt either proves the database reachable or fails.
            client.database("admin").run_command(doc! { "ping": 1 }).await?;

            Ok(Established {
                handle: client,
                host,
            })
        }
    }
}
