//! Common types for GATT operations

use crate::uuid::Uuid;
use bitflags::bitflags;

bitflags! {
    /// Characteristic properties bitmask as defined in the Bluetooth
    /// specification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    /// Names of the set flags in canonical order (broadcast first,
    /// extendedProperties last). This is the order events report them in.
    pub fn names(&self) -> Vec<&'static str> {
        const TABLE: [(CharacteristicProperties, &str); 8] = [
            (CharacteristicProperties::BROADCAST, "broadcast"),
            (CharacteristicProperties::READ, "read"),
            (
                CharacteristicProperties::WRITE_WITHOUT_RESPONSE,
                "writeWithoutResponse",
            ),
            (CharacteristicProperties::WRITE, "write"),
            (CharacteristicProperties::NOTIFY, "notify"),
            (CharacteristicProperties::INDICATE, "indicate"),
            (
                CharacteristicProperties::AUTHENTICATED_SIGNED_WRITES,
                "authenticatedSignedWrites",
            ),
            (
                CharacteristicProperties::EXTENDED_PROPERTIES,
                "extendedProperties",
            ),
        ];

        TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// A GATT primary service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Service UUID
    pub uuid: Uuid,
    /// First handle of the service's attribute group
    pub start_handle: u16,
    /// Last handle of the service's attribute group
    pub end_handle: u16,
}

/// A GATT characteristic.
///
/// `end_handle` is not transmitted on the wire: discovery derives it as the
/// next characteristic's `start_handle - 1`, or the owning service's
/// `end_handle` for the last characteristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Characteristic {
    /// Characteristic UUID
    pub uuid: Uuid,
    /// Declaration handle
    pub start_handle: u16,
    /// Value handle
    pub value_handle: u16,
    /// Last handle owned by this characteristic (derived)
    pub end_handle: u16,
    /// Properties bitmask
    pub properties: CharacteristicProperties,
}

/// A GATT descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Descriptor UUID
    pub uuid: Uuid,
    /// Attribute handle
    pub handle: u16,
}

/// An included-service declaration found during discovery.
///
/// Included services are reported to the caller but not stored back into
/// the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedService {
    /// Handle of the include declaration attribute
    pub handle: u16,
    /// First handle of the included service
    pub start_handle: u16,
    /// Included service UUID
    pub uuid: Uuid,
}
