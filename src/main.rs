use std::path::PathBuf;
use std::process;

use clap::Parser;
use tokio::net::TcpListener;

use lingolink::bootstrap::{establish, RetryPolicy};
use lingolink::config::load_config;
use lingolink::db::{Database, MongoConnector};
use lingolink::http::OperationalServer;
use lingolink::lifecycle::{signals, Shutdown};
use lingolink::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "lingolink")]
#[command(about = "Backend service for the lingolink language-exchange app", long_about = None)]
struct Cli {
    /// Path to the TOML config file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Config before logging: the log level comes from config. Config
    // errors go to stderr since the subscriber is not installed yet.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lingolink: invalid configuration: {}", e);
            process::exit(1);
        }
    };

    logging::init(&config.observability.log_level);
    tracing::info!("lingolink v0.1.0 starting");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Bootstrap the database. Exhaustion is fatal: the service must not
    // run in a half-initialized state.
    let connector = MongoConnector::from_config(&config.database);
    let policy = RetryPolicy::from_config(&config.database);

    tracing::info!(
        max_attempts = policy.max_attempts,
        retry_delay_ms = policy.retry_delay.as_millis() as u64,
        "Connecting to database"
    );

    let client = match establish(&connector, &policy).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Max connection attempts reached, exiting");
            process::exit(1);
        }
    };
    let db = Database::new(client);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::listen(&shutdown).await;
    });

    // Listener binds last: traffic only once the database is up.
    let listener = match TcpListener::bind(&config.server.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.server.bind_address,
                error = %e,
                "Failed to bind operational server"
            );
            process::exit(1);
        }
    };

    let server = OperationalServer::new(&config.server, db);
    if let Err(e) = server.run(listener, server_shutdown).await {
        tracing::error!(error = %e, "Operational server failed");
        process::exit(1);
    }

    tracing::info!("Shutdown complete");
}
