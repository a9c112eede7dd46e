//! Generic Attribute Profile (GATT) client engine
//!
//! Builds the attribute hierarchy on top of the ATT layer: paginated
//! discovery, the per-peripheral attribute directory, and the session
//! façade the application drives.

pub mod directory;
pub mod discovery;
pub mod session;
pub mod types;


// Re-export the public API
pub use self::directory::AttributeDirectory;
pub use self::discovery::{
    CharacteristicDiscovery, DescriptorDiscovery, DiscoveryStep, IncludedServiceDiscovery,
    ServiceDiscovery,
};
pub use self::session::{
    AddressType, DiscoveredCharacteristic, GattError, GattSession, SessionEvent,
};
pub use self::types::{
    Characteristic, CharacteristicProperties, Descriptor, IncludedService, Service,
};
