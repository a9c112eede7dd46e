//! Attribute Protocol (ATT) client engine
//!
//! This module provides the protocol half of the stack: the PDU codec and
//! the single-in-flight transaction queue. The GATT layer builds its
//! discovery and attribute operations on top of these.

pub mod constants;
pub mod error;
pub mod pdu;
pub mod queue;

#[cfg(test)]
mod tests;

// Re-export the public API
pub use self::constants::*;
pub use self::error::{AttError, AttErrorCode, AttResult};
pub use self::pdu::{
    decode_response, AttPdu, AttResponse, ErrorResponse, FindInformationRequest,
    FindInformationResponse, GroupAttributeData, HandleUuidPair, HandleValue,
    HandleValueNotification, ReadByGroupTypeRequest, ReadByGroupTypeResponse, ReadByTypeRequest,
    ReadByTypeResponse, ReadRequest, ReadResponse, WriteCommand, WriteRequest, WriteResponse,
};
pub use self::queue::{CommandQueue, Completion, QueueOutput};
