use crate::{ClientError, DiscoveredDevice};
use std::time::Duration;
use ubidisc_core::DecodedResponse;
use ubidisc_transport::{ProbeTransport, TransportError, UdpProbeTransport};

/// Probe timeout used when the caller does not specify one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Orchestrates discovery: one probe exchange and one decode per host.
///
/// Generic over the transport so the probing logic can be exercised against
/// fake links; [`DiscoveryClient::new`] gives the real UDP client.
#[derive(Debug, Clone)]
pub struct DiscoveryClient<T: ProbeTransport> {
    transport: T,
}

impl DiscoveryClient<UdpProbeTransport> {
    pub const fn new() -> Self {
        Self {
            transport: UdpProbeTransport::new(),
        }
    }
}

impl Default for DiscoveryClient<UdpProbeTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ProbeTransport> DiscoveryClient<T> {
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Probes one host, returning `Ok(None)` when it does not answer in
    /// time and `Err` when it answers with a malformed packet.
    pub async fn discover(
        &self,
        host: &str,
        wait: Duration,
    ) -> Result<Option<DiscoveredDevice>, ClientError> {
        let Some(raw) = self.transport.exchange(host, wait).await? else {
            return Ok(None);
        };
        let decoded = DecodedResponse::decode(&raw)?;
        for tlv in &decoded.unknown {
            log::debug!(
                "{host}: unknown TLV type {} ({} bytes)",
                tlv.type_code,
                tlv.value.len()
            );
        }
        Ok(Some(DiscoveredDevice {
            host: host.to_string(),
            report: decoded.report,
        }))
    }

    /// Probes each host in order and collects the devices that answered,
    /// preserving host-list order.
    ///
    /// Hosts that time out are omitted. A malformed response or a per-host
    /// I/O failure is logged and skipped; only failure to open a socket at
    /// all aborts the run.
    pub async fn discover_multi<S: AsRef<str>>(
        &self,
        hosts: &[S],
        wait: Duration,
    ) -> Result<Vec<DiscoveredDevice>, ClientError> {
        let mut devices = Vec::new();
        for host in hosts {
            let host = host.as_ref();
            match self.discover(host, wait).await {
                Ok(Some(device)) => devices.push(device),
                Ok(None) => {}
                Err(ClientError::Transport(TransportError::Bind(err))) => {
                    return Err(TransportError::Bind(err).into());
                }
                Err(err) => log::warn!("{host}: {err}"),
            }
        }
        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::DiscoveryClient;
    use crate::ClientError;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use ubidisc_core::encoding::Writer;
    use ubidisc_core::frame::{write_tlv, PacketHeader, TlvType};
    use ubidisc_transport::{ProbeTransport, TransportError, UdpProbeTransport};

    /// Maps host names to canned replies; hosts without an entry time out.
    struct FakeLink {
        replies: HashMap<&'static str, Vec<u8>>,
    }

    impl ProbeTransport for FakeLink {
        async fn exchange(
            &self,
            host: &str,
            _wait: Duration,
        ) -> Result<Option<Vec<u8>>, TransportError> {
            Ok(self.replies.get(host).cloned())
        }
    }

    fn response_with_hostname(name: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; 4 + 3 + name.len()];
        let mut w = Writer::new(&mut buf);
        PacketHeader {
            magic: 1,
            message_type: 0,
            body_length: (3 + name.len()) as u16,
        }
        .encode(&mut w)
        .unwrap();
        write_tlv(&mut w, TlvType::HostName, name).unwrap();
        buf
    }

    #[tokio::test]
    async fn silent_host_is_omitted_and_order_preserved() {
        let replies = HashMap::from([
            ("10.0.0.1", response_with_hostname(b"first")),
            ("10.0.0.3", response_with_hostname(b"third")),
        ]);
        let client = DiscoveryClient::with_transport(FakeLink { replies });

        let hosts = ["10.0.0.1", "10.0.0.2", "10.0.0.3"];
        let devices = client
            .discover_multi(&hosts, Duration::from_millis(10))
            .await
            .unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].host, "10.0.0.1");
        assert_eq!(devices[0].report.hostname.as_deref(), Some(&b"first"[..]));
        assert_eq!(devices[1].host, "10.0.0.3");
        assert_eq!(devices[1].report.hostname.as_deref(), Some(&b"third"[..]));
    }

    #[tokio::test]
    async fn malformed_response_skips_host_but_continues() {
        let replies = HashMap::from([
            ("10.0.0.1", response_with_hostname(b"ok")),
            // header claims 20 body bytes, supplies none
            ("10.0.0.2", vec![0x01, 0x00, 0x00, 0x14]),
            ("10.0.0.3", response_with_hostname(b"also-ok")),
        ]);
        let client = DiscoveryClient::with_transport(FakeLink { replies });

        let hosts = ["10.0.0.1", "10.0.0.2", "10.0.0.3"];
        let devices = client
            .discover_multi(&hosts, Duration::from_millis(10))
            .await
            .unwrap();

        let found: Vec<&str> = devices.iter().map(|d| d.host.as_str()).collect();
        assert_eq!(found, ["10.0.0.1", "10.0.0.3"]);
    }

    #[tokio::test]
    async fn discover_surfaces_decode_failure() {
        let replies = HashMap::from([("10.0.0.2", vec![0x01, 0x00, 0x00, 0x14])]);
        let client = DiscoveryClient::with_transport(FakeLink { replies });

        let err = client
            .discover("10.0.0.2", Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn discover_over_udp_end_to_end() {
        let responder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = responder.local_addr().unwrap().port();

        let device = tokio::spawn(async move {
            let mut buf = [0u8; 16];
            let (n, src) = responder.recv_from(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], &[0x01, 0x00, 0x00, 0x00]);

            let mut reply = vec![0u8; 64];
            let mut w = Writer::new(&mut reply);
            PacketHeader {
                magic: 1,
                message_type: 0,
                body_length: 7 + 13,
            }
            .encode(&mut w)
            .unwrap();
            write_tlv(&mut w, TlvType::UpTime, &[0x00, 0x00, 0x0E, 0x10]).unwrap();
            write_tlv(&mut w, TlvType::HostName, b"rooftop-ap").unwrap();
            let len = w.position();
            reply.truncate(len);
            responder.send_to(&reply, src).await.unwrap();
        });

        let client = DiscoveryClient::with_transport(UdpProbeTransport::with_port(port));
        let found = client
            .discover("127.0.0.1", Duration::from_secs(2))
            .await
            .unwrap()
            .expect("device should answer");

        assert_eq!(found.host, "127.0.0.1");
        assert_eq!(found.report.uptime, Some(3600));
        assert_eq!(found.report.hostname.as_deref(), Some(&b"rooftop-ap"[..]));
        device.await.unwrap();
    }
}
