//! High-level async discovery client for ubidisc.
//!
//! Probes a host list over UDP, decodes each response with `ubidisc-core`,
//! and collects the devices that answered. Hosts that time out are omitted;
//! a malformed response from one host never aborts the rest of the run.

pub mod client;
pub mod discovery;
pub mod error;

pub use client::{DiscoveryClient, DEFAULT_TIMEOUT};
pub use discovery::DiscoveredDevice;
pub use error::ClientError;
pub use ubidisc_core::{DeviceReport, InterfaceAddress, MacAddr};
