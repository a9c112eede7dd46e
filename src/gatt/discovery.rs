//! Paginated GATT discovery state machines
//!
//! ATT responses are capped in size, so enumerating services,
//! characteristics, and descriptors takes multiple request/response rounds,
//! each narrowed to the handles not yet covered. Every discovery here is an
//! explicit continuation state: the records accumulated so far plus enough
//! context to build the next request. One round maps to one
//! [`on_response`](ServiceDiscovery::on_response) call.
//!
//! Shared policy: a response that is not the expected opcode (an Error
//! Response in particular) finalizes the round with whatever was
//! accumulated. Peripherals signal end-of-range with "Attribute Not
//! Found", so the Error PDU doubles as the terminator.

use crate::att::constants::*;
use crate::att::pdu::{
    AttPdu, AttResponse, FindInformationRequest, ReadByGroupTypeRequest, ReadByTypeRequest,
};
use crate::gatt::types::{
    Characteristic, CharacteristicProperties, Descriptor, IncludedService, Service,
};
use crate::uuid::Uuid;
use log::warn;

/// Result of feeding one response into a discovery round
#[derive(Debug)]
pub enum DiscoveryStep<S> {
    /// More pages remain; transmit `request` and feed its response back in
    Continue { state: S, request: Vec<u8> },
    /// The record set is final
    Complete(S),
}

/// True when the filter admits the UUID (an empty filter admits all)
pub(crate) fn matches_filter(filter: &[Uuid], uuid: &Uuid) -> bool {
    filter.is_empty() || filter.contains(uuid)
}

/// Primary service enumeration over the full handle range.
#[derive(Debug)]
pub struct ServiceDiscovery {
    pub(crate) filter: Vec<Uuid>,
    pub(crate) services: Vec<Service>,
}

impl ServiceDiscovery {
    pub fn start(filter: Vec<Uuid>) -> (Self, Vec<u8>) {
        let request = ReadByGroupTypeRequest {
            start_handle: ATT_HANDLE_MIN,
            end_handle: ATT_HANDLE_MAX,
            group_type: PRIMARY_SERVICE_UUID,
        };
        (
            Self {
                filter,
                services: Vec::new(),
            },
            request.serialize(),
        )
    }

    pub fn on_response(mut self, response: &AttResponse) -> DiscoveryStep<Self> {
        if let AttResponse::ReadByGroupType(rsp) = response {
            for record in &rsp.data {
                let Some(uuid) = Uuid::from_wire(&record.value) else {
                    warn!(
                        "skipping service record at 0x{:04x} with {}-byte uuid",
                        record.start_handle,
                        record.value.len()
                    );
                    continue;
                };
                self.services.push(Service {
                    uuid,
                    start_handle: record.start_handle,
                    end_handle: record.end_handle,
                });
            }

            match self.services.last() {
                Some(last) if last.end_handle != ATT_HANDLE_MAX => {
                    let request = ReadByGroupTypeRequest {
                        start_handle: last.end_handle,
                        end_handle: ATT_HANDLE_MAX,
                        group_type: PRIMARY_SERVICE_UUID,
                    };
                    return DiscoveryStep::Continue {
                        request: request.serialize(),
                        state: self,
                    };
                }
                _ => {}
            }
        }

        DiscoveryStep::Complete(self)
    }

    /// UUIDs admitted by the filter, in first-discovered order
    pub fn matching_uuids(&self) -> Vec<Uuid> {
        self.services
            .iter()
            .filter(|service| matches_filter(&self.filter, &service.uuid))
            .map(|service| service.uuid)
            .collect()
    }
}

/// Included-service enumeration within one service's handle range.
#[derive(Debug)]
pub struct IncludedServiceDiscovery {
    pub(crate) service_uuid: Uuid,
    pub(crate) service_end: u16,
    pub(crate) filter: Vec<Uuid>,
    pub(crate) includes: Vec<IncludedService>,
}

impl IncludedServiceDiscovery {
    pub fn start(service: &Service, filter: Vec<Uuid>) -> (Self, Vec<u8>) {
        let request = ReadByTypeRequest {
            start_handle: service.start_handle,
            end_handle: service.end_handle,
            attribute_type: INCLUDE_UUID,
        };
        (
            Self {
                service_uuid: service.uuid,
                service_end: service.end_handle,
                filter,
                includes: Vec::new(),
            },
            request.serialize(),
        )
    }

    pub fn on_response(mut self, response: &AttResponse) -> DiscoveryStep<Self> {
        if let AttResponse::ReadByType(rsp) = response {
            for record in &rsp.data {
                // Include declaration value: start(2) end(2) uuid(2)
                if record.value.len() < 6 {
                    warn!(
                        "skipping short include declaration at 0x{:04x}",
                        record.handle
                    );
                    continue;
                }
                let Some(uuid) = Uuid::from_wire(&record.value[4..]) else {
                    warn!("skipping include declaration with malformed uuid");
                    continue;
                };
                self.includes.push(IncludedService {
                    handle: record.handle,
                    start_handle: u16::from_le_bytes([record.value[0], record.value[1]]),
                    uuid,
                });
            }

            match self.includes.last() {
                Some(last) if last.handle < self.service_end => {
                    let request = ReadByTypeRequest {
                        start_handle: last.handle + 1,
                        end_handle: self.service_end,
                        attribute_type: INCLUDE_UUID,
                    };
                    return DiscoveryStep::Continue {
                        request: request.serialize(),
                        state: self,
                    };
                }
                _ => {}
            }
        }

        DiscoveryStep::Complete(self)
    }

    /// Included-service UUIDs admitted by the filter
    pub fn matching_uuids(&self) -> Vec<Uuid> {
        self.includes
            .iter()
            .filter(|include| matches_filter(&self.filter, &include.uuid))
            .map(|include| include.uuid)
            .collect()
    }
}

/// Characteristic enumeration within one service's handle range.
#[derive(Debug)]
pub struct CharacteristicDiscovery {
    pub(crate) service_uuid: Uuid,
    pub(crate) service_end: u16,
    pub(crate) filter: Vec<Uuid>,
    pub(crate) found: Vec<Characteristic>,
}

impl CharacteristicDiscovery {
    pub fn start(service: &Service, filter: Vec<Uuid>) -> (Self, Vec<u8>) {
        let request = ReadByTypeRequest {
            start_handle: service.start_handle,
            end_handle: service.end_handle,
            attribute_type: CHARACTERISTIC_UUID,
        };
        (
            Self {
                service_uuid: service.uuid,
                service_end: service.end_handle,
                filter,
                found: Vec::new(),
            },
            request.serialize(),
        )
    }

    pub fn on_response(mut self, response: &AttResponse) -> DiscoveryStep<Self> {
        if let AttResponse::ReadByType(rsp) = response {
            for record in &rsp.data {
                // Declaration value: properties(1) value_handle(2) uuid(2|16)
                if record.value.len() < 5 {
                    warn!(
                        "skipping short characteristic declaration at 0x{:04x}",
                        record.handle
                    );
                    continue;
                }
                let Some(uuid) = Uuid::from_wire(&record.value[3..]) else {
                    warn!("skipping characteristic declaration with malformed uuid");
                    continue;
                };
                self.found.push(Characteristic {
                    uuid,
                    start_handle: record.handle,
                    value_handle: u16::from_le_bytes([record.value[1], record.value[2]]),
                    end_handle: 0, // derived once the full set is known
                    properties: CharacteristicProperties::from_bits_truncate(record.value[0]),
                });
            }

            // A handle at or past the range end is terminal; a misbehaving
            // peer can report 0xffff inside a smaller range
            match self.found.last() {
                Some(last) if last.value_handle < self.service_end => {
                    let request = ReadByTypeRequest {
                        start_handle: last.value_handle + 1,
                        end_handle: self.service_end,
                        attribute_type: CHARACTERISTIC_UUID,
                    };
                    return DiscoveryStep::Continue {
                        request: request.serialize(),
                        state: self,
                    };
                }
                _ => {}
            }
        }

        DiscoveryStep::Complete(self)
    }

    /// Derive end handles now that the full page set is known: each
    /// characteristic ends where the next begins, and the last one ends
    /// with the service.
    pub fn finish(mut self) -> Vec<Characteristic> {
        for i in 1..self.found.len() {
            self.found[i - 1].end_handle = self.found[i].start_handle - 1;
        }
        if let Some(last) = self.found.last_mut() {
            last.end_handle = self.service_end;
        }
        self.found
    }
}

/// Descriptor enumeration between a characteristic's value handle and its
/// end handle.
#[derive(Debug)]
pub struct DescriptorDiscovery {
    pub(crate) service_uuid: Uuid,
    pub(crate) characteristic_uuid: Uuid,
    pub(crate) end_handle: u16,
    pub(crate) descriptors: Vec<Descriptor>,
}

impl DescriptorDiscovery {
    pub fn start(service_uuid: Uuid, characteristic: &Characteristic) -> (Self, Vec<u8>) {
        let request = FindInformationRequest {
            start_handle: characteristic.value_handle.saturating_add(1),
            end_handle: characteristic.end_handle,
        };
        (
            Self {
                service_uuid,
                characteristic_uuid: characteristic.uuid,
                end_handle: characteristic.end_handle,
                descriptors: Vec::new(),
            },
            request.serialize(),
        )
    }

    pub fn on_response(mut self, response: &AttResponse) -> DiscoveryStep<Self> {
        if let AttResponse::FindInformation(rsp) = response {
            for pair in &rsp.data {
                self.descriptors.push(Descriptor {
                    uuid: pair.uuid,
                    handle: pair.handle,
                });
            }

            match self.descriptors.last() {
                Some(last) if last.handle < self.end_handle => {
                    let request = FindInformationRequest {
                        start_handle: last.handle + 1,
                        end_handle: self.end_handle,
                    };
                    return DiscoveryStep::Continue {
                        request: request.serialize(),
                        state: self,
                    };
                }
                _ => {}
            }
        }

        DiscoveryStep::Complete(self)
    }
}
