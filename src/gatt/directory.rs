//! In-memory GATT attribute hierarchy
//!
//! The directory holds one peripheral's discovered services,
//! characteristics, and descriptors, keyed by UUID at each level. It is
//! rebuilt per connection and discarded on disconnect.
//!
//! Known limitation: services are keyed by UUID alone, so a peripheral
//! exposing two service instances with the same UUID collapses to the one
//! discovered last. Correcting this would change the public key space, so
//! it is kept as a documented simplification.

use crate::gatt::types::{Characteristic, Descriptor, Service};
use crate::uuid::Uuid;
use std::collections::HashMap;

/// Discovered attribute hierarchy for one peripheral
#[derive(Debug, Default)]
pub struct AttributeDirectory {
    services: HashMap<Uuid, Service>,
    characteristics: HashMap<Uuid, HashMap<Uuid, Characteristic>>,
    descriptors: HashMap<Uuid, HashMap<Uuid, HashMap<Uuid, Descriptor>>>,
}

impl AttributeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full service set with a fresh discovery result
    pub fn replace_services(&mut self, services: Vec<Service>) {
        self.services.clear();
        for service in services {
            self.services.insert(service.uuid, service);
        }
    }

    pub fn service(&self, uuid: &Uuid) -> Option<&Service> {
        self.services.get(uuid)
    }

    /// Drop the characteristic and descriptor sub-trees for a service.
    /// Called when characteristic discovery starts so a re-discovery
    /// replaces rather than merges.
    pub fn reset_characteristics(&mut self, service_uuid: &Uuid) {
        self.characteristics.remove(service_uuid);
        self.descriptors.remove(service_uuid);
    }

    /// Store a service's characteristic set
    pub fn insert_characteristics(
        &mut self,
        service_uuid: &Uuid,
        characteristics: Vec<Characteristic>,
    ) {
        let entry = self.characteristics.entry(*service_uuid).or_default();
        entry.clear();
        for characteristic in characteristics {
            entry.insert(characteristic.uuid, characteristic);
        }
    }

    pub fn characteristic(
        &self,
        service_uuid: &Uuid,
        characteristic_uuid: &Uuid,
    ) -> Option<&Characteristic> {
        self.characteristics
            .get(service_uuid)
            .and_then(|characteristics| characteristics.get(characteristic_uuid))
    }

    /// Store a characteristic's descriptor set, replacing any prior one
    pub fn insert_descriptors(
        &mut self,
        service_uuid: &Uuid,
        characteristic_uuid: &Uuid,
        descriptors: Vec<Descriptor>,
    ) {
        let entry = self
            .descriptors
            .entry(*service_uuid)
            .or_default()
            .entry(*characteristic_uuid)
            .or_default();
        entry.clear();
        for descriptor in descriptors {
            entry.insert(descriptor.uuid, descriptor);
        }
    }

    pub fn descriptor(
        &self,
        service_uuid: &Uuid,
        characteristic_uuid: &Uuid,
        descriptor_uuid: &Uuid,
    ) -> Option<&Descriptor> {
        self.descriptors
            .get(service_uuid)
            .and_then(|characteristics| characteristics.get(characteristic_uuid))
            .and_then(|descriptors| descriptors.get(descriptor_uuid))
    }

    /// Find every characteristic whose value handle matches, for routing
    /// unsolicited notifications. Returns (service UUID, characteristic
    /// UUID) pairs.
    pub fn characteristics_by_value_handle(&self, value_handle: u16) -> Vec<(Uuid, Uuid)> {
        let mut matches = Vec::new();
        for (service_uuid, characteristics) in &self.characteristics {
            for (characteristic_uuid, characteristic) in characteristics {
                if characteristic.value_handle == value_handle {
                    matches.push((*service_uuid, *characteristic_uuid));
                }
            }
        }
        matches
    }

    /// Discard everything; the directory is not persisted across
    /// reconnects.
    pub fn clear(&mut self) {
        self.services.clear();
        self.characteristics.clear();
        self.descriptors.clear();
    }
}
