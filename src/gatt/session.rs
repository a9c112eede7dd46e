//! GATT session façade
//!
//! One [`GattSession`] manages the ATT session with one peripheral. Every
//! public operation is fire-and-forget: it enqueues the ATT traffic and
//! completes later through a [`SessionEvent`]. The session owns no I/O:
//! the transport collaborator drains [`poll_transmit`](GattSession::poll_transmit)
//! into the channel, feeds inbound PDUs to
//! [`handle_data`](GattSession::handle_data), and relays link lifecycle
//! through `on_connected` / `on_disconnected` / `on_rssi`.
//!
//! Timeouts and retries are deliberately absent: a silent peripheral is
//! the surrounding application's watchdog problem.

use crate::att::constants::*;
use crate::att::pdu::{
    decode_response, AttPdu, AttResponse, HandleValueNotification, ReadByTypeRequest, ReadRequest,
    WriteCommand, WriteRequest,
};
use crate::att::queue::{CommandQueue, Completion, QueueOutput};
use crate::gatt::directory::AttributeDirectory;
use crate::gatt::discovery::{
    matches_filter, CharacteristicDiscovery, DescriptorDiscovery, DiscoveryStep,
    IncludedServiceDiscovery, ServiceDiscovery,
};
use crate::gatt::types::{Characteristic, CharacteristicProperties};
use crate::uuid::Uuid;
use log::{debug, trace, warn};
use std::collections::VecDeque;
use thiserror::Error;

/// Peripheral address type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Public,
    Random,
}

/// Error types for GATT session operations.
///
/// All of these are application misuse: hierarchy lookups assume prior
/// successful discovery, so referencing an unknown UUID fails fast rather
/// than going to the wire.
#[derive(Debug, Error)]
pub enum GattError {
    #[error("service {0} has not been discovered")]
    ServiceNotFound(Uuid),

    #[error("characteristic {1} of service {0} has not been discovered")]
    CharacteristicNotFound(Uuid, Uuid),

    #[error("descriptor {2} of characteristic {1} of service {0} has not been discovered")]
    DescriptorNotFound(Uuid, Uuid, Uuid),
}

/// Characteristic summary carried by
/// [`SessionEvent::CharacteristicsDiscover`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCharacteristic {
    pub uuid: Uuid,
    pub properties: CharacteristicProperties,
}

/// Events emitted by the session to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Connect {
        address: String,
    },
    Disconnect {
        address: String,
    },
    Rssi {
        address: String,
        rssi: i8,
    },
    ServicesDiscover {
        address: String,
        uuids: Vec<Uuid>,
    },
    IncludedServicesDiscover {
        address: String,
        service: Uuid,
        uuids: Vec<Uuid>,
    },
    CharacteristicsDiscover {
        address: String,
        service: Uuid,
        characteristics: Vec<DiscoveredCharacteristic>,
    },
    DescriptorsDiscover {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        uuids: Vec<Uuid>,
    },
    Read {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        data: Vec<u8>,
    },
    Write {
        address: String,
        service: Uuid,
        characteristic: Uuid,
    },
    Broadcast {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        state: bool,
    },
    Notify {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        state: bool,
    },
    Notification {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        data: Vec<u8>,
    },
    ValueRead {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
        data: Vec<u8>,
    },
    ValueWrite {
        address: String,
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
    },
    HandleRead {
        address: String,
        handle: u16,
        data: Vec<u8>,
    },
    HandleWrite {
        address: String,
        handle: u16,
    },
}

/// Which characteristic configuration descriptor a subscription chain
/// targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKind {
    Notify,
    Broadcast,
}

/// Continuation attached to each queued command, interpreted when the
/// command completes.
#[derive(Debug)]
enum Action {
    DiscoverServices(ServiceDiscovery),
    DiscoverIncludedServices(IncludedServiceDiscovery),
    DiscoverCharacteristics(CharacteristicDiscovery),
    DiscoverDescriptors(DescriptorDiscovery),
    ReadCharacteristic {
        service: Uuid,
        characteristic: Uuid,
    },
    WriteCharacteristic {
        service: Uuid,
        characteristic: Uuid,
    },
    ReadDescriptor {
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
    },
    WriteDescriptor {
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
    },
    ReadHandle(u16),
    WriteHandle(u16),
    ConfigRead {
        kind: ConfigKind,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
    },
    ConfigWrite {
        kind: ConfigKind,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
    },
}

/// ATT/GATT client session for one peripheral
#[derive(Debug)]
pub struct GattSession {
    address: String,
    address_type: AddressType,
    directory: AttributeDirectory,
    queue: CommandQueue<Action>,
    outgoing: VecDeque<Vec<u8>>,
    events: VecDeque<SessionEvent>,
    connected: bool,
}

impl GattSession {
    /// Create a session scoped to one peripheral address. The directory
    /// starts empty; discovery populates it after the transport signals
    /// `on_connected`.
    pub fn new(address: impl Into<String>, address_type: AddressType) -> Self {
        Self {
            address: address.into(),
            address_type,
            directory: AttributeDirectory::new(),
            queue: CommandQueue::new(),
            outgoing: VecDeque::new(),
            events: VecDeque::new(),
            connected: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The discovered hierarchy, for direct inspection
    pub fn directory(&self) -> &AttributeDirectory {
        &self.directory
    }

    /// Next PDU to transmit on the channel, if any
    pub fn poll_transmit(&mut self) -> Option<Vec<u8>> {
        self.outgoing.pop_front()
    }

    /// Next pending event for the application, if any
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    // --- Transport lifecycle ---

    /// The collaborator established the link
    pub fn on_connected(&mut self) {
        self.connected = true;
        self.events.push_back(SessionEvent::Connect {
            address: self.address.clone(),
        });
    }

    /// The link dropped. All in-flight and pending commands are abandoned
    /// without completion and the directory is discarded.
    pub fn on_disconnected(&mut self) {
        self.connected = false;
        self.queue.clear();
        self.directory.clear();
        self.outgoing.clear();
        self.events.push_back(SessionEvent::Disconnect {
            address: self.address.clone(),
        });
    }

    /// The collaborator sampled signal strength
    pub fn on_rssi(&mut self, rssi: i8) {
        self.events.push_back(SessionEvent::Rssi {
            address: self.address.clone(),
            rssi,
        });
    }

    /// Feed one inbound ATT PDU from the transport.
    ///
    /// Handle Value Notifications are routed to notification dispatch no
    /// matter what is in flight; everything else goes through the
    /// transaction queue for correlation.
    pub fn handle_data(&mut self, pdu: &[u8]) {
        let Some(&opcode) = pdu.first() else {
            return;
        };
        trace!("inbound pdu opcode 0x{:02x} ({} bytes)", opcode, pdu.len());

        if opcode == ATT_HANDLE_VALUE_NTF {
            self.dispatch_notification(pdu);
            return;
        }

        let outputs = self.queue.on_data(pdu);
        self.apply(outputs);
    }

    // --- Discovery operations ---

    /// Enumerate primary services. All discovered services replace the
    /// directory's current set; the `ServicesDiscover` event reports only
    /// those matching `filter` (empty filter reports all).
    pub fn discover_services(&mut self, filter: Vec<Uuid>) {
        let (state, request) = ServiceDiscovery::start(filter);
        self.submit(
            request,
            Completion::OnResponse(Action::DiscoverServices(state)),
        );
    }

    /// Enumerate services included by `service`. Included services are
    /// reported, not stored.
    pub fn discover_included_services(
        &mut self,
        service: Uuid,
        filter: Vec<Uuid>,
    ) -> Result<(), GattError> {
        let owner = self
            .directory
            .service(&service)
            .ok_or(GattError::ServiceNotFound(service))?
            .clone();
        let (state, request) = IncludedServiceDiscovery::start(&owner, filter);
        self.submit(
            request,
            Completion::OnResponse(Action::DiscoverIncludedServices(state)),
        );
        Ok(())
    }

    /// Enumerate characteristics of `service`. Clears the service's
    /// characteristic and descriptor sub-trees up front; re-discovery
    /// replaces, never merges.
    pub fn discover_characteristics(
        &mut self,
        service: Uuid,
        filter: Vec<Uuid>,
    ) -> Result<(), GattError> {
        let owner = self
            .directory
            .service(&service)
            .ok_or(GattError::ServiceNotFound(service))?
            .clone();
        self.directory.reset_characteristics(&service);
        let (state, request) = CharacteristicDiscovery::start(&owner, filter);
        self.submit(
            request,
            Completion::OnResponse(Action::DiscoverCharacteristics(state)),
        );
        Ok(())
    }

    /// Enumerate descriptors between the characteristic's value handle and
    /// its end handle.
    pub fn discover_descriptors(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
    ) -> Result<(), GattError> {
        let target = self.lookup_characteristic(service, characteristic)?.clone();
        let (state, request) = DescriptorDiscovery::start(service, &target);
        self.submit(
            request,
            Completion::OnResponse(Action::DiscoverDescriptors(state)),
        );
        Ok(())
    }

    // --- Attribute operations ---

    /// Read a characteristic's value; completes with a `Read` event.
    pub fn read(&mut self, service: Uuid, characteristic: Uuid) -> Result<(), GattError> {
        let handle = self
            .lookup_characteristic(service, characteristic)?
            .value_handle;
        self.submit(
            ReadRequest { handle }.serialize(),
            Completion::OnResponse(Action::ReadCharacteristic {
                service,
                characteristic,
            }),
        );
        Ok(())
    }

    /// Write a characteristic's value; completes with a `Write` event.
    ///
    /// With `without_response` the value goes out as a Write Command and
    /// the event fires on transmission; otherwise a Write Request awaits
    /// the peer's acknowledgment.
    pub fn write(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
        data: Vec<u8>,
        without_response: bool,
    ) -> Result<(), GattError> {
        let handle = self
            .lookup_characteristic(service, characteristic)?
            .value_handle;
        let action = Action::WriteCharacteristic {
            service,
            characteristic,
        };
        if without_response {
            self.submit(
                WriteCommand {
                    handle,
                    value: data,
                }
                .serialize(),
                Completion::OnSent(action),
            );
        } else {
            self.submit(
                WriteRequest {
                    handle,
                    value: data,
                }
                .serialize(),
                Completion::OnResponse(action),
            );
        }
        Ok(())
    }

    /// Read a descriptor's value; completes with a `ValueRead` event.
    pub fn read_descriptor_value(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
    ) -> Result<(), GattError> {
        let handle = self
            .directory
            .descriptor(&service, &characteristic, &descriptor)
            .ok_or(GattError::DescriptorNotFound(
                service,
                characteristic,
                descriptor,
            ))?
            .handle;
        self.submit(
            ReadRequest { handle }.serialize(),
            Completion::OnResponse(Action::ReadDescriptor {
                service,
                characteristic,
                descriptor,
            }),
        );
        Ok(())
    }

    /// Write a descriptor's value (always acknowledged); completes with a
    /// `ValueWrite` event.
    pub fn write_descriptor_value(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
        descriptor: Uuid,
        data: Vec<u8>,
    ) -> Result<(), GattError> {
        let handle = self
            .directory
            .descriptor(&service, &characteristic, &descriptor)
            .ok_or(GattError::DescriptorNotFound(
                service,
                characteristic,
                descriptor,
            ))?
            .handle;
        self.submit(
            WriteRequest {
                handle,
                value: data,
            }
            .serialize(),
            Completion::OnResponse(Action::WriteDescriptor {
                service,
                characteristic,
                descriptor,
            }),
        );
        Ok(())
    }

    /// Read a raw attribute handle, bypassing the directory
    pub fn read_handle(&mut self, handle: u16) {
        self.submit(
            ReadRequest { handle }.serialize(),
            Completion::OnResponse(Action::ReadHandle(handle)),
        );
    }

    /// Write a raw attribute handle, bypassing the directory
    pub fn write_handle(&mut self, handle: u16, data: Vec<u8>, without_response: bool) {
        if without_response {
            self.submit(
                WriteCommand {
                    handle,
                    value: data,
                }
                .serialize(),
                Completion::OnSent(Action::WriteHandle(handle)),
            );
        } else {
            self.submit(
                WriteRequest {
                    handle,
                    value: data,
                }
                .serialize(),
                Completion::OnResponse(Action::WriteHandle(handle)),
            );
        }
    }

    /// Enable or disable notifications: read the Client Characteristic
    /// Configuration descriptor, set/clear bit 0, write it back. Completes
    /// with a `Notify` event.
    pub fn set_notify(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
    ) -> Result<(), GattError> {
        self.start_config_chain(ConfigKind::Notify, service, characteristic, enable)
    }

    /// Enable or disable broadcasting via the Server Characteristic
    /// Configuration descriptor. Completes with a `Broadcast` event.
    pub fn set_broadcast(
        &mut self,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
    ) -> Result<(), GattError> {
        self.start_config_chain(ConfigKind::Broadcast, service, characteristic, enable)
    }

    // --- Internals ---

    fn lookup_characteristic(
        &self,
        service: Uuid,
        characteristic: Uuid,
    ) -> Result<&Characteristic, GattError> {
        self.directory
            .characteristic(&service, &characteristic)
            .ok_or(GattError::CharacteristicNotFound(service, characteristic))
    }

    fn start_config_chain(
        &mut self,
        kind: ConfigKind,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
    ) -> Result<(), GattError> {
        let target = self.lookup_characteristic(service, characteristic)?;
        let request = ReadByTypeRequest {
            start_handle: target.start_handle,
            end_handle: target.end_handle,
            attribute_type: match kind {
                ConfigKind::Notify => CLIENT_CHAR_CONFIG_UUID,
                ConfigKind::Broadcast => SERVER_CHAR_CONFIG_UUID,
            },
        };
        self.submit(
            request.serialize(),
            Completion::OnResponse(Action::ConfigRead {
                kind,
                service,
                characteristic,
                enable,
            }),
        );
        Ok(())
    }

    fn submit(&mut self, pdu: Vec<u8>, completion: Completion<Action>) {
        let outputs = self.queue.enqueue(pdu, completion);
        self.apply(outputs);
    }

    fn apply(&mut self, outputs: Vec<QueueOutput<Action>>) {
        for output in outputs {
            match output {
                QueueOutput::Transmit(pdu) => {
                    trace!("transmit pdu opcode 0x{:02x}", pdu.first().copied().unwrap_or(0));
                    self.outgoing.push_back(pdu);
                }
                QueueOutput::Sent(action) => self.complete_sent(action),
                QueueOutput::Response { payload, pdu } => self.dispatch_response(payload, &pdu),
                // Logged by the queue; nothing to do here
                QueueOutput::Echo | QueueOutput::Discarded(_) => {}
            }
        }
    }

    /// Complete an unacknowledged write the moment it was transmitted
    fn complete_sent(&mut self, action: Action) {
        match action {
            Action::WriteCharacteristic {
                service,
                characteristic,
            } => self.events.push_back(SessionEvent::Write {
                address: self.address.clone(),
                service,
                characteristic,
            }),
            Action::WriteHandle(handle) => self.events.push_back(SessionEvent::HandleWrite {
                address: self.address.clone(),
                handle,
            }),
            other => warn!("sent-only completion for unexpected action {other:?}"),
        }
    }

    fn dispatch_notification(&mut self, pdu: &[u8]) {
        let notification = match HandleValueNotification::parse(pdu) {
            Ok(notification) => notification,
            Err(err) => {
                warn!("malformed handle value notification: {err}");
                return;
            }
        };

        let matches = self
            .directory
            .characteristics_by_value_handle(notification.handle);
        if matches.is_empty() {
            debug!(
                "notification for unknown value handle 0x{:04x}",
                notification.handle
            );
        }
        for (service, characteristic) in matches {
            self.events.push_back(SessionEvent::Notification {
                address: self.address.clone(),
                service,
                characteristic,
                data: notification.value.clone(),
            });
        }
    }

    fn dispatch_response(&mut self, action: Action, pdu: &[u8]) {
        let response = match decode_response(pdu) {
            Ok(response) => response,
            Err(err) => {
                warn!("undecodable response pdu: {err}");
                AttResponse::Other(pdu.first().copied().unwrap_or(0), Vec::new())
            }
        };

        if let AttResponse::Error(err) = &response {
            debug!(
                "error response for request 0x{:02x}: {:?} on handle 0x{:04x}",
                err.request_opcode, err.error_code, err.handle
            );
        }

        match action {
            Action::DiscoverServices(state) => match state.on_response(&response) {
                DiscoveryStep::Continue { state, request } => self.submit(
                    request,
                    Completion::OnResponse(Action::DiscoverServices(state)),
                ),
                DiscoveryStep::Complete(state) => {
                    let uuids = state.matching_uuids();
                    self.directory.replace_services(state.services);
                    self.events.push_back(SessionEvent::ServicesDiscover {
                        address: self.address.clone(),
                        uuids,
                    });
                }
            },
            Action::DiscoverIncludedServices(state) => match state.on_response(&response) {
                DiscoveryStep::Continue { state, request } => self.submit(
                    request,
                    Completion::OnResponse(Action::DiscoverIncludedServices(state)),
                ),
                DiscoveryStep::Complete(state) => {
                    self.events.push_back(SessionEvent::IncludedServicesDiscover {
                        address: self.address.clone(),
                        service: state.service_uuid,
                        uuids: state.matching_uuids(),
                    });
                }
            },
            Action::DiscoverCharacteristics(state) => match state.on_response(&response) {
                DiscoveryStep::Continue { state, request } => self.submit(
                    request,
                    Completion::OnResponse(Action::DiscoverCharacteristics(state)),
                ),
                DiscoveryStep::Complete(state) => {
                    let service = state.service_uuid;
                    let filter = state.filter.clone();
                    let all = state.finish();
                    let characteristics = all
                        .iter()
                        .filter(|c| matches_filter(&filter, &c.uuid))
                        .map(|c| DiscoveredCharacteristic {
                            uuid: c.uuid,
                            properties: c.properties,
                        })
                        .collect();
                    self.directory.insert_characteristics(&service, all);
                    self.events.push_back(SessionEvent::CharacteristicsDiscover {
                        address: self.address.clone(),
                        service,
                        characteristics,
                    });
                }
            },
            Action::DiscoverDescriptors(state) => match state.on_response(&response) {
                DiscoveryStep::Continue { state, request } => self.submit(
                    request,
                    Completion::OnResponse(Action::DiscoverDescriptors(state)),
                ),
                DiscoveryStep::Complete(state) => {
                    let uuids = state.descriptors.iter().map(|d| d.uuid).collect();
                    self.directory.insert_descriptors(
                        &state.service_uuid,
                        &state.characteristic_uuid,
                        state.descriptors,
                    );
                    self.events.push_back(SessionEvent::DescriptorsDiscover {
                        address: self.address.clone(),
                        service: state.service_uuid,
                        characteristic: state.characteristic_uuid,
                        uuids,
                    });
                }
            },
            Action::ReadCharacteristic {
                service,
                characteristic,
            } => {
                if let AttResponse::Read(rsp) = response {
                    self.events.push_back(SessionEvent::Read {
                        address: self.address.clone(),
                        service,
                        characteristic,
                        data: rsp.value,
                    });
                } else {
                    warn!(
                        "read of {characteristic} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::WriteCharacteristic {
                service,
                characteristic,
            } => {
                if let AttResponse::Write = response {
                    self.events.push_back(SessionEvent::Write {
                        address: self.address.clone(),
                        service,
                        characteristic,
                    });
                } else {
                    warn!(
                        "write of {characteristic} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::ReadDescriptor {
                service,
                characteristic,
                descriptor,
            } => {
                if let AttResponse::Read(rsp) = response {
                    self.events.push_back(SessionEvent::ValueRead {
                        address: self.address.clone(),
                        service,
                        characteristic,
                        descriptor,
                        data: rsp.value,
                    });
                } else {
                    warn!(
                        "descriptor read of {descriptor} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::WriteDescriptor {
                service,
                characteristic,
                descriptor,
            } => {
                if let AttResponse::Write = response {
                    self.events.push_back(SessionEvent::ValueWrite {
                        address: self.address.clone(),
                        service,
                        characteristic,
                        descriptor,
                    });
                } else {
                    warn!(
                        "descriptor write of {descriptor} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::ReadHandle(handle) => {
                if let AttResponse::Read(rsp) = response {
                    self.events.push_back(SessionEvent::HandleRead {
                        address: self.address.clone(),
                        handle,
                        data: rsp.value,
                    });
                } else {
                    warn!(
                        "read of handle 0x{handle:04x} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::WriteHandle(handle) => {
                if let AttResponse::Write = response {
                    self.events.push_back(SessionEvent::HandleWrite {
                        address: self.address.clone(),
                        handle,
                    });
                } else {
                    warn!(
                        "write of handle 0x{handle:04x} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
            Action::ConfigRead {
                kind,
                service,
                characteristic,
                enable,
            } => self.continue_config_chain(kind, service, characteristic, enable, &response),
            Action::ConfigWrite {
                kind,
                service,
                characteristic,
                enable,
            } => {
                if let AttResponse::Write = response {
                    let event = match kind {
                        ConfigKind::Notify => SessionEvent::Notify {
                            address: self.address.clone(),
                            service,
                            characteristic,
                            state: enable,
                        },
                        ConfigKind::Broadcast => SessionEvent::Broadcast {
                            address: self.address.clone(),
                            service,
                            characteristic,
                            state: enable,
                        },
                    };
                    self.events.push_back(event);
                } else {
                    warn!(
                        "configuration write of {characteristic} answered with opcode 0x{:02x}",
                        response.opcode()
                    );
                }
            }
        }
    }

    /// Second leg of a set_notify/set_broadcast chain: flip bit 0 of the
    /// configuration value just read and write it back.
    fn continue_config_chain(
        &mut self,
        kind: ConfigKind,
        service: Uuid,
        characteristic: Uuid,
        enable: bool,
        response: &AttResponse,
    ) {
        let record = match response {
            AttResponse::ReadByType(rsp) => rsp.data.first(),
            _ => None,
        };
        let Some(record) = record.filter(|record| record.value.len() >= 2) else {
            warn!(
                "no usable configuration descriptor for {characteristic}; dropping {kind:?} request"
            );
            return;
        };

        let mut value = u16::from_le_bytes([record.value[0], record.value[1]]);
        if enable {
            value |= 0x0001;
        } else {
            value &= 0xfffe;
        }

        self.submit(
            WriteRequest {
                handle: record.handle,
                value: value.to_le_bytes().to_vec(),
            }
            .serialize(),
            Completion::OnResponse(Action::ConfigWrite {
                kind,
                service,
                characteristic,
                enable,
            }),
        );
    }
}
