//! OS signal handling.
//!
//! Translates SIGTERM and ctrl-c into the internal shutdown broadcast.
//! Uses Tokio's async-safe signal facilities.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for a termination signal and trigger shutdown.
///
/// Runs until the first SIGTERM or ctrl-c; subsequent signals are left to
/// the default disposition so a second one force-kills a stuck process.
pub async fn listen(shutdown: &Shutdown) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                shutdown.trigger();
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("SIGTERM received, shutting down");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-c received, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Ctrl-c received, shutting down");
    }

    shutdown.trigger();
}
