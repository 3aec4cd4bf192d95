//! Connector abstraction for the bootstrap loop.

use std::future::Future;

/// A successfully established connection.
///
/// Carries the driver handle plus a human-readable host identifier for the
/// success log line.
#[derive(Debug)]
pub struct Established<H> {
    /// The connection handle, owned by the caller after bootstrap.
    pub handle: H,

    /// Host identifier reported on the success log line.
    pub host: String,
}

/// Something that can attempt to open a connection.
///
/// Each call to [`connect`](Connector::connect) is one full attempt: it
/// must perform a real round trip so transient unavailability surfaces as
/// an error rather than being deferred to first use.
pub trait Connector {
    /// Handle returned on success.
    type Handle;

    /// Driver error for a failed attempt.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform one connection attempt.
    fn connect(
        &self,
    ) -> impl Future<Output = Result<Established<Self::Handle>, Self::Error>> + Send;
}
