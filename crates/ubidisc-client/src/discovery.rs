use ubidisc_core::DeviceReport;

/// One responding device: the host that was probed plus its decoded report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscoveredDevice {
    pub host: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub report: DeviceReport,
}
