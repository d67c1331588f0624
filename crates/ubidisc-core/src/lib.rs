//! Wire-protocol codec for the Ubiquiti-style UDP discovery beacon.
//!
//! `ubidisc-core` provides `no_std`-compatible encoding and decoding of the
//! 4-byte discovery probe and the TLV-encoded response packet that devices
//! answer with on UDP port 10001. It performs no I/O; every function is a
//! pure computation over an in-memory buffer. Transport lives in
//! `ubidisc-transport`, orchestration in `ubidisc-client`.
//!
//! The protocol carries no checksum and no authentication: a spoofed UDP
//! datagram is indistinguishable from a genuine device response. Callers
//! must treat decoded reports as untrusted network input.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables the response decoder, which allocates.
//! - **`serde`** — `Serialize` impls on decoded types; raw byte fields are
//!   rendered as best-effort UTF-8.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Bounds-checked byte-slice reader and writer.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Packet framing: response header, TLV sub-headers, and type codes.
pub mod frame;
/// The fixed outbound discovery probe.
pub mod probe;
/// The decoded device report and the response decoder.
#[cfg(feature = "alloc")]
pub mod report;
/// Semantic value types: MAC addresses and MAC+IPv4 interface pairs.
pub mod types;

pub use error::{DecodeError, EncodeError};
pub use frame::{PacketHeader, TlvType, DISCOVERY_PORT};
pub use probe::DiscoveryProbe;
#[cfg(feature = "alloc")]
pub use report::{DecodedResponse, DeviceReport, UnknownTlv};
pub use types::{InterfaceAddress, MacAddr};
