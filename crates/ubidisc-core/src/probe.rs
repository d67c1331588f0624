use crate::encoding::Writer;
use crate::EncodeError;

/// The fixed 4-byte probe datagram that elicits a discovery response:
/// `version(1) command(1)` followed by two reserved zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryProbe {
    pub version: u8,
    pub command: u8,
}

impl DiscoveryProbe {
    /// The version-1 discovery probe, `01 00 00 00` on the wire.
    pub const V1: Self = Self {
        version: 1,
        command: 0,
    };

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.version, self.command, 0, 0]
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::DiscoveryProbe;
    use crate::encoding::Writer;

    #[test]
    fn v1_probe_bytes() {
        assert_eq!(DiscoveryProbe::V1.to_bytes(), [0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn encode_matches_to_bytes() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        DiscoveryProbe::V1.encode(&mut w).unwrap();
        assert_eq!(w.as_written(), DiscoveryProbe::V1.to_bytes());
    }
}
