use crate::encoding::Reader;
use crate::frame::{PacketHeader, TlvType};
use crate::types::{InterfaceAddress, MacAddr};
use crate::DecodeError;
use alloc::vec::Vec;

/// Everything a device reports about itself in one discovery response.
///
/// Each optional field is present only when the corresponding TLV appeared
/// in the packet; `addresses` collects every Address TLV in packet order.
/// The `fwversion`, `hostname`, `product`, and `essid` fields are kept as
/// the raw bytes received: the protocol declares no text encoding for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceReport {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hwaddr: Option<MacAddr>,
    pub addresses: Vec<InterfaceAddress>,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_lossy"
        )
    )]
    pub fwversion: Option<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uptime: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_lossy"
        )
    )]
    pub hostname: Option<Vec<u8>>,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_lossy"
        )
    )]
    pub product: Option<Vec<u8>>,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_lossy"
        )
    )]
    pub essid: Option<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub wmode: Option<u8>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sysid: Option<u16>,
}

/// A TLV whose type code the decoder does not recognize, kept for
/// observability rather than printed from inside the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTlv {
    pub type_code: u8,
    pub value: Vec<u8>,
}

/// Result of decoding one response datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResponse {
    pub report: DeviceReport,
    pub unknown: Vec<UnknownTlv>,
}

impl DecodedResponse {
    /// Decodes a raw response datagram.
    ///
    /// The header's `body_length` must be fully backed by input bytes and
    /// every TLV must fit inside it; any datagram bytes past the declared
    /// body are ignored. Unknown TLV type codes never fail the decode.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(buf);
        let header = PacketHeader::decode(&mut r)?;
        let body = r.read_exact(usize::from(header.body_length))?;

        let mut report = DeviceReport::default();
        let mut unknown = Vec::new();
        let mut body_r = Reader::new(body);
        while !body_r.is_empty() {
            let tlv_type = TlvType::from_u8(body_r.read_u8()?);
            let len = usize::from(body_r.read_be_u16()?);
            let value = body_r.read_exact(len)?;

            match tlv_type {
                TlvType::HwAddr => report.hwaddr = Some(decode_mac(value)?),
                TlvType::Address => report.addresses.push(decode_address(value)?),
                TlvType::FirmwareVersion => report.fwversion = Some(value.to_vec()),
                TlvType::UpTime => report.uptime = Some(decode_u32(value)?),
                TlvType::HostName => report.hostname = Some(value.to_vec()),
                TlvType::Product => report.product = Some(value.to_vec()),
                TlvType::Essid => report.essid = Some(value.to_vec()),
                TlvType::WirelessMode => report.wmode = Some(decode_u8(value)?),
                TlvType::SystemId => report.sysid = Some(decode_u16(value)?),
                TlvType::Unknown(type_code) => unknown.push(UnknownTlv {
                    type_code,
                    value: value.to_vec(),
                }),
            }
        }

        Ok(Self { report, unknown })
    }
}

fn decode_mac(value: &[u8]) -> Result<MacAddr, DecodeError> {
    let octets: [u8; 6] = value.try_into().map_err(|_| DecodeError::InvalidLength)?;
    Ok(MacAddr(octets))
}

// Address TLVs are exactly MAC(6) + IPv4(4).
fn decode_address(value: &[u8]) -> Result<InterfaceAddress, DecodeError> {
    if value.len() != 10 {
        return Err(DecodeError::InvalidLength);
    }
    let mut r = Reader::new(value);
    Ok(InterfaceAddress {
        hwaddr: r.read_mac()?,
        ipv4: r.read_ipv4()?,
    })
}

fn decode_u8(value: &[u8]) -> Result<u8, DecodeError> {
    match value {
        [b] => Ok(*b),
        _ => Err(DecodeError::InvalidLength),
    }
}

fn decode_u16(value: &[u8]) -> Result<u16, DecodeError> {
    let bytes: [u8; 2] = value.try_into().map_err(|_| DecodeError::InvalidLength)?;
    Ok(u16::from_be_bytes(bytes))
}

fn decode_u32(value: &[u8]) -> Result<u32, DecodeError> {
    let bytes: [u8; 4] = value.try_into().map_err(|_| DecodeError::InvalidLength)?;
    Ok(u32::from_be_bytes(bytes))
}


#[cfg(feature = "serde")]
fn serialize_lossy<S: serde::Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(b) => serializer.collect_str(&alloc::string::String::from_utf8_lossy(b)),
        None => serializer.serialize_none(),
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::DeviceReport;
    use crate::types::{InterfaceAddress, MacAddr};
    use core::net::Ipv4Addr;

    #[test]
    fn report_serializes_strings_and_omits_absent_fields() {
        let report = DeviceReport {
            hwaddr: Some(MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])),
            addresses: vec![InterfaceAddress {
                hwaddr: MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]),
                ipv4: Ipv4Addr::new(10, 0, 0, 5),
            }],
            hostname: Some(b"gateway".to_vec()),
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hwaddr": "aa:bb:cc:dd:ee:ff",
                "addresses": [{"hwaddr": "aa:bb:cc:dd:ee:ff", "ipv4": "10.0.0.5"}],
                "hostname": "gateway",
            })
        );
    }

    #[test]
    fn non_utf8_bytes_serialize_lossily() {
        let report = DeviceReport {
            essid: Some(vec![0x66, 0x6F, 0xFF, 0x6F]),
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["essid"], "fo\u{FFFD}o");
    }
}
