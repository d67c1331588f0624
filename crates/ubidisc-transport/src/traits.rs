use std::time::Duration;
use thiserror::Error;

/// Errors from the probe transport.
///
/// `Bind` means no socket could be created at all — the environment is
/// unusable and a discovery run should stop. `Io` covers per-host failures
/// (resolution, send, receive) that are local to that one probe.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open probe socket: {0}")]
    Bind(#[source] std::io::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async trait for exchanging one probe datagram with one host.
///
/// Implemented by [`UdpProbeTransport`](crate::UdpProbeTransport) for real
/// networks; tests supply fake links.
pub trait ProbeTransport: Send + Sync {
    /// Sends the discovery probe to `host` and waits up to `wait` for a
    /// single reply datagram.
    ///
    /// `Ok(None)` means the host did not answer in time — an expected
    /// outcome for unreachable or non-participating hosts, not an error.
    async fn exchange(&self, host: &str, wait: Duration)
        -> Result<Option<Vec<u8>>, TransportError>;
}
