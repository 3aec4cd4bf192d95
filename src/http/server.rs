//! Operational HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with liveness/readiness handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve until the shutdown broadcast fires

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::db::ReadinessProbe;
use crate::http::request::{UuidRequestId, REQUEST_ID_HEADER};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState<P> {
    pub probe: P,
}

/// HTTP server for the operational endpoints.
///
/// Generic over the readiness probe, which in production is the
/// bootstrapped [`Database`](crate::db::Database) handle.
pub struct OperationalServer {
    router: Router,
}

impl OperationalServer {
    /// Create the server from config and a readiness probe.
    pub fn new<P>(config: &ServerConfig, probe: P) -> Self
    where
        P: ReadinessProbe + Clone + Send + Sync + 'static,
    {
        let state = AppState { probe };
        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<P>(config: &ServerConfig, state: AppState<P>) -> Router
    where
        P: ReadinessProbe + Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/healthz", get(healthz))
            .route("/readyz", get(readyz::<P>))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(SetRequestIdLayer::new(
                REQUEST_ID_HEADER,
                UuidRequestId::default(),
            ))
            .with_state(state)
    }

    /// Serve on the given listener until shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!(address = %local_addr, "Operational server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Operational server draining");
            })
            .await
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz<P>(State(state): State<AppState<P>>) -> Response
where
    P: ReadinessProbe + Clone + Send + Sync + 'static,
{
    match state.probe.probe().await {
        Ok(()) => {
            metrics::record_readiness_probe(true);
            (StatusCode::OK, Json(json!({ "status": "ready" }))).into_response()
        }
        Err(e) => {
            metrics::record_readiness_probe(false);
            tracing::warn!(error = %e, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unready", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
