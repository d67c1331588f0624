use crate::encoding::{Reader, Writer};
use crate::{DecodeError, EncodeError};

/// UDP port devices listen on for discovery probes.
pub const DISCOVERY_PORT: u16 = 10001;

/// TLV type codes carried in discovery responses.
///
/// Codes not assigned a meaning decode as [`TlvType::Unknown`]; the protocol
/// is forward-compatible with newer firmware emitting new codes, so an
/// unknown code is never a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvType {
    HwAddr,
    Address,
    FirmwareVersion,
    UpTime,
    HostName,
    Product,
    Essid,
    WirelessMode,
    SystemId,
    Unknown(u8),
}

impl TlvType {
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::HwAddr,
            2 => Self::Address,
            3 => Self::FirmwareVersion,
            10 => Self::UpTime,
            11 => Self::HostName,
            12 => Self::Product,
            13 => Self::Essid,
            14 => Self::WirelessMode,
            16 => Self::SystemId,
            v => Self::Unknown(v),
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            Self::HwAddr => 1,
            Self::Address => 2,
            Self::FirmwareVersion => 3,
            Self::UpTime => 10,
            Self::HostName => 11,
            Self::Product => 12,
            Self::Essid => 13,
            Self::WirelessMode => 14,
            Self::SystemId => 16,
            Self::Unknown(v) => v,
        }
    }
}

/// The 4-byte response header: `magic(1) message_type(1) body_length(2, BE)`.
///
/// `magic` and `message_type` are structural framing only; the protocol
/// assigns them no semantics on the client side, so they are decoded but
/// never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub magic: u8,
    pub message_type: u8,
    /// Exact byte count of the TLV stream that follows.
    pub body_length: u16,
}

impl PacketHeader {
    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_u8(self.magic)?;
        w.write_u8(self.message_type)?;
        w.write_be_u16(self.body_length)
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            magic: r.read_u8()?,
            message_type: r.read_u8()?,
            body_length: r.read_be_u16()?,
        })
    }
}

/// Writes one TLV record: `type(1) length(2, BE) value`.
pub fn write_tlv(w: &mut Writer<'_>, tlv_type: TlvType, value: &[u8]) -> Result<(), EncodeError> {
    let len = u16::try_from(value.len()).map_err(|_| EncodeError::ValueOutOfRange)?;
    w.write_u8(tlv_type.to_u8())?;
    w.write_be_u16(len)?;
    w.write_all(value)
}
