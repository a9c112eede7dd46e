//! Bluetooth UUID handling for GATT attributes
//!
//! A UUID is either a 16-bit SIG-assigned short form or a full 128-bit
//! value. The two forms are distinct identifier spaces: a 128-bit UUID is
//! never silently downgraded, even when it happens to sit on the Bluetooth
//! base UUID. Wire representation is little-endian; the display form is the
//! byte-reversed (big-endian) hex string.

use std::fmt;
use std::str::FromStr;

/// UUID for GATT attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uuid {
    /// 16-bit SIG-assigned UUID
    Uuid16(u16),
    /// Full 128-bit UUID, stored in wire (little-endian) byte order
    Uuid128([u8; 16]),
}

impl Uuid {
    /// Create a UUID from a 16-bit value
    pub const fn from_u16(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }

    /// Convert little-endian wire bytes to a UUID based on length.
    ///
    /// Accepts 2-byte (16-bit) and 16-byte (128-bit) slices, the two
    /// encodings ATT embeds in attribute values. Returns `None` for any
    /// other length.
    pub fn from_wire(bytes: &[u8]) -> Option<Self> {
        match bytes.len() {
            2 => Some(Uuid::Uuid16(u16::from_le_bytes([bytes[0], bytes[1]]))),
            16 => {
                let mut uuid = [0u8; 16];
                uuid.copy_from_slice(bytes);
                Some(Uuid::Uuid128(uuid))
            }
            _ => None,
        }
    }

    /// Get the wire (little-endian) byte representation of this UUID
    pub fn to_wire(&self) -> Vec<u8> {
        match self {
            Uuid::Uuid16(uuid) => uuid.to_le_bytes().to_vec(),
            Uuid::Uuid128(uuid) => uuid.to_vec(),
        }
    }

    /// Get the 16-bit value if this is a short-form UUID
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Uuid::Uuid16(uuid) => Some(*uuid),
            Uuid::Uuid128(_) => None,
        }
    }
}

impl From<u16> for Uuid {
    fn from(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uuid::Uuid16(uuid) => write!(f, "{:x}", uuid),
            Uuid::Uuid128(uuid) => {
                let mut be = *uuid;
                be.reverse();
                write!(f, "{}", hex::encode(be))
            }
        }
    }
}

/// Error parsing a UUID from its string form
#[derive(Debug, thiserror::Error)]
pub enum UuidParseError {
    #[error("UUID string has invalid length")]
    InvalidLength,
    #[error("UUID string is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();

        match cleaned.len() {
            1..=4 => {
                let mut padded = [b'0'; 4];
                padded[4 - cleaned.len()..].copy_from_slice(cleaned.as_bytes());
                let mut bytes = [0u8; 2];
                hex::decode_to_slice(padded, &mut bytes)?;
                Ok(Uuid::Uuid16(u16::from_be_bytes(bytes)))
            }
            32 => {
                let mut bytes = [0u8; 16];
                hex::decode_to_slice(&cleaned, &mut bytes)?;
                bytes.reverse(); // display form is big-endian, wire is little
                Ok(Uuid::Uuid128(bytes))
            }
            _ => Err(UuidParseError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_uuid_formats_as_bare_hex() {
        assert_eq!(Uuid::from_u16(0x180d).to_string(), "180d");
        assert_eq!(Uuid::from_u16(0x2a37).to_string(), "2a37");
        // Leading zeroes are not padded
        assert_eq!(Uuid::from_u16(0x000f).to_string(), "f");
    }

    #[test]
    fn long_uuid_formats_as_reversed_hex() {
        let wire: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ];
        let uuid = Uuid::from_wire(&wire).unwrap();
        assert_eq!(uuid.to_string(), "0f0e0d0c0b0a09080706050403020100");
    }

    #[test]
    fn wire_length_dispatch() {
        assert_eq!(
            Uuid::from_wire(&[0x0d, 0x18]),
            Some(Uuid::Uuid16(0x180d))
        );
        assert!(matches!(
            Uuid::from_wire(&[0u8; 16]),
            Some(Uuid::Uuid128(_))
        ));
        assert_eq!(Uuid::from_wire(&[0u8; 4]), None);
        assert_eq!(Uuid::from_wire(&[]), None);
    }

    #[test]
    fn long_form_is_never_downgraded() {
        // The base-UUID image of 0x180d is still a distinct 128-bit UUID
        let mut wire = [
            0xfb, 0x34, 0x9b, 0x5f, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ];
        wire[12] = 0x0d;
        wire[13] = 0x18;
        let long = Uuid::from_wire(&wire).unwrap();
        assert_ne!(long, Uuid::from_u16(0x180d));
        assert_eq!(long.as_u16(), None);
    }

    #[test]
    fn parse_round_trips_display() {
        let short: Uuid = "180d".parse().unwrap();
        assert_eq!(short, Uuid::from_u16(0x180d));

        let long: Uuid = "0f0e0d0c0b0a09080706050403020100".parse().unwrap();
        assert_eq!(long.to_string(), "0f0e0d0c0b0a09080706050403020100");

        // Hyphenated input is tolerated
        let hyphenated: Uuid = "0f0e0d0c-0b0a-0908-0706-050403020100".parse().unwrap();
        assert_eq!(hyphenated, long);

        assert!("xyz".parse::<Uuid>().is_err());
        assert!("0011223344".parse::<Uuid>().is_err());
    }
}
