//! BlueGatt - a client-side ATT/GATT engine for one BLE peripheral
//!
//! This library implements the Attribute Protocol (ATT) and the client half
//! of the Generic Attribute Profile (GATT) over a single connection-oriented
//! channel. It discovers the peripheral's service/characteristic/descriptor
//! hierarchy, performs attribute reads and writes, and manages
//! notification/indication subscriptions.
//!
//! The transport itself (link setup, framing, RSSI sampling) is an external
//! collaborator: the application feeds inbound PDUs and lifecycle signals
//! into a [`GattSession`] and drains outbound PDUs and [`SessionEvent`]s
//! back out.

pub mod att;
pub mod gatt;
pub mod uuid;

// Re-export common types for convenience
pub use att::{AttError, AttErrorCode, AttResult, CommandQueue, Completion, QueueOutput};
pub use gatt::{
    AddressType, AttributeDirectory, Characteristic, CharacteristicProperties, Descriptor,
    DiscoveredCharacteristic, GattError, GattSession, IncludedService, Service, SessionEvent,
};
pub use uuid::Uuid;
