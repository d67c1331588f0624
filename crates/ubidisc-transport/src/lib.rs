//! Async UDP probe transport for ubidisc discovery.
//!
//! Owns no protocol knowledge beyond the probe bytes: it sends the fixed
//! discovery probe to one host and hands back whatever single datagram the
//! host answers with, or `None` on timeout.

#![allow(async_fn_in_trait)]

pub mod traits;
pub mod udp;

pub use traits::{ProbeTransport, TransportError};
pub use udp::UdpProbeTransport;
