use crate::{ProbeTransport, TransportError};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use ubidisc_core::{DiscoveryProbe, DISCOVERY_PORT};

/// Largest response datagram we accept; the protocol fits one datagram and
/// makes no provision for reassembly.
const MAX_RESPONSE_LEN: usize = 4096;

/// UDP implementation of [`ProbeTransport`].
///
/// Each `exchange` call opens its own ephemeral socket, connects it to the
/// target so send/recv address that one peer, and drops it on every exit
/// path. No socket is shared across hosts or reused between calls.
#[derive(Debug, Clone, Copy)]
pub struct UdpProbeTransport {
    port: u16,
}

impl UdpProbeTransport {
    /// Transport targeting the standard discovery port, 10001.
    pub const fn new() -> Self {
        Self {
            port: DISCOVERY_PORT,
        }
    }

    /// Transport targeting a non-standard port (used by tests).
    pub const fn with_port(port: u16) -> Self {
        Self { port }
    }

    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl Default for UdpProbeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTransport for UdpProbeTransport {
    async fn exchange(
        &self,
        host: &str,
        wait: Duration,
    ) -> Result<Option<Vec<u8>>, TransportError> {
        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)))
            .await
            .map_err(TransportError::Bind)?;
        socket.connect((host, self.port)).await?;
        socket.send(&DiscoveryProbe::V1.to_bytes()).await?;

        let mut buf = vec![0u8; MAX_RESPONSE_LEN];
        match timeout(wait, socket.recv(&mut buf)).await {
            Ok(Ok(n)) => {
                log::trace!("{host}: received {n} response bytes");
                buf.truncate(n);
                Ok(Some(buf))
            }
            Ok(Err(err)) => Err(err.into()),
            Err(_elapsed) => {
                log::trace!("{host}: no response within {wait:?}");
                Ok(None)
            }
        }
    }
}
