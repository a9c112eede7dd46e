//! ATT PDU codec
//!
//! Request and response PDUs as structured records. Every PDU starts with
//! its opcode byte; multi-byte integers are little-endian. The codec only
//! decodes structure: whether an [`AttResponse::Error`] terminates a
//! discovery round or fails an operation is the caller's decision, matching
//! ATT's design where the Error PDU shares space with valid responses.

use super::constants::*;
use super::error::{AttError, AttErrorCode, AttResult};
use crate::uuid::Uuid;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// ATT PDU wire format
pub trait AttPdu: Sized {
    /// Opcode for this PDU
    fn opcode() -> u8;

    /// Parse the PDU from bytes (opcode byte included)
    fn parse(data: &[u8]) -> AttResult<Self>;

    /// Serialize the PDU to bytes
    fn serialize(&self) -> Vec<u8>;
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> AttResult<u16> {
    cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| AttError::InvalidPdu)
}

// --- Requests ---

/// Read By Group Type Request packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadByGroupTypeRequest {
    /// First requested handle
    pub start_handle: u16,
    /// Last requested handle
    pub end_handle: u16,
    /// Group type (16-bit declaration UUID, e.g. primary service)
    pub group_type: u16,
}

impl AttPdu for ReadByGroupTypeRequest {
    fn opcode() -> u8 {
        ATT_READ_BY_GROUP_TYPE_REQ
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() != 7 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            start_handle: read_u16(&mut cursor)?,
            end_handle: read_u16(&mut cursor)?,
            group_type: read_u16(&mut cursor)?,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(7);

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.start_handle.to_le_bytes());
        packet.extend_from_slice(&self.end_handle.to_le_bytes());
        packet.extend_from_slice(&self.group_type.to_le_bytes());

        packet
    }
}

/// Read By Type Request packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadByTypeRequest {
    /// First requested handle
    pub start_handle: u16,
    /// Last requested handle
    pub end_handle: u16,
    /// Attribute type (16-bit declaration UUID)
    pub attribute_type: u16,
}

impl AttPdu for ReadByTypeRequest {
    fn opcode() -> u8 {
        ATT_READ_BY_TYPE_REQ
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() != 7 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            start_handle: read_u16(&mut cursor)?,
            end_handle: read_u16(&mut cursor)?,
            attribute_type: read_u16(&mut cursor)?,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(7);

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.start_handle.to_le_bytes());
        packet.extend_from_slice(&self.end_handle.to_le_bytes());
        packet.extend_from_slice(&self.attribute_type.to_le_bytes());

        packet
    }
}

/// Read Request packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Handle to read
    pub handle: u16,
}

impl AttPdu for ReadRequest {
    fn opcode() -> u8 {
        ATT_READ_REQ
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() != 3 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            handle: read_u16(&mut cursor)?,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(3);

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.handle.to_le_bytes());

        packet
    }
}

/// Find Information Request packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindInformationRequest {
    /// First requested handle
    pub start_handle: u16,
    /// Last requested handle
    pub end_handle: u16,
}

impl AttPdu for FindInformationRequest {
    fn opcode() -> u8 {
        ATT_FIND_INFO_REQ
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() != 5 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            start_handle: read_u16(&mut cursor)?,
            end_handle: read_u16(&mut cursor)?,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(5);

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.start_handle.to_le_bytes());
        packet.extend_from_slice(&self.end_handle.to_le_bytes());

        packet
    }
}

/// Write Request packet (acknowledged write)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    /// Handle to write
    pub handle: u16,
    /// Value to write
    pub value: Vec<u8>,
}

impl AttPdu for WriteRequest {
    fn opcode() -> u8 {
        ATT_WRITE_REQ
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 3 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            handle: read_u16(&mut cursor)?,
            value: data[3..].to_vec(),
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(3 + self.value.len());

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.handle.to_le_bytes());
        packet.extend_from_slice(&self.value);

        packet
    }
}

/// Write Command packet (unacknowledged write)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCommand {
    /// Handle to write
    pub handle: u16,
    /// Value to write
    pub value: Vec<u8>,
}

impl AttPdu for WriteCommand {
    fn opcode() -> u8 {
        ATT_WRITE_CMD
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 3 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            handle: read_u16(&mut cursor)?,
            value: data[3..].to_vec(),
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(3 + self.value.len());

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.handle.to_le_bytes());
        packet.extend_from_slice(&self.value);

        packet
    }
}

// --- Responses ---

/// Error Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Opcode of the request in error
    pub request_opcode: u8,
    /// Attribute handle in error
    pub handle: u16,
    /// Error code
    pub error_code: AttErrorCode,
}

impl AttPdu for ErrorResponse {
    fn opcode() -> u8 {
        ATT_ERROR_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 5 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[2..]);
        Ok(Self {
            request_opcode: data[1],
            handle: read_u16(&mut cursor)?,
            error_code: data[4].into(),
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(5);

        packet.push(Self::opcode());
        packet.push(self.request_opcode);
        packet.extend_from_slice(&self.handle.to_le_bytes());
        packet.push(self.error_code.into());

        packet
    }
}

/// Group record in a Read By Group Type Response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAttributeData {
    /// First handle of the group
    pub start_handle: u16,
    /// Last handle of the group
    pub end_handle: u16,
    /// Attribute value (for service discovery: the service UUID)
    pub value: Vec<u8>,
}

/// Read By Group Type Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadByGroupTypeResponse {
    /// Per-record stride: 6 for 16-bit embedded UUIDs, 20 for 128-bit
    pub length: u8,
    /// Group records
    pub data: Vec<GroupAttributeData>,
}

impl AttPdu for ReadByGroupTypeResponse {
    fn opcode() -> u8 {
        ATT_READ_BY_GROUP_TYPE_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 2 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let length = data[1];
        if length < 6 {
            return Err(AttError::InvalidPdu);
        }

        let mut records = Vec::new();
        let mut offset = 2;

        while offset + length as usize <= data.len() {
            let mut cursor = Cursor::new(&data[offset..]);
            let start_handle = read_u16(&mut cursor)?;
            let end_handle = read_u16(&mut cursor)?;
            let value = data[offset + 4..offset + length as usize].to_vec();

            records.push(GroupAttributeData {
                start_handle,
                end_handle,
                value,
            });

            offset += length as usize;
        }

        Ok(Self {
            length,
            data: records,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::new();

        packet.push(Self::opcode());
        packet.push(self.length);

        for record in &self.data {
            packet.extend_from_slice(&record.start_handle.to_le_bytes());
            packet.extend_from_slice(&record.end_handle.to_le_bytes());
            packet.extend_from_slice(&record.value);
        }

        packet
    }
}

/// Handle and value in a Read By Type Response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleValue {
    /// Attribute handle
    pub handle: u16,
    /// Attribute value
    pub value: Vec<u8>,
}

/// Read By Type Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadByTypeResponse {
    /// Per-record stride including the 2-byte handle
    pub length: u8,
    /// Handle-value records
    pub data: Vec<HandleValue>,
}

impl AttPdu for ReadByTypeResponse {
    fn opcode() -> u8 {
        ATT_READ_BY_TYPE_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 2 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let length = data[1];
        if length < 3 {
            return Err(AttError::InvalidPdu);
        }

        let mut records = Vec::new();
        let mut offset = 2;

        while offset + length as usize <= data.len() {
            let mut cursor = Cursor::new(&data[offset..]);
            let handle = read_u16(&mut cursor)?;
            let value = data[offset + 2..offset + length as usize].to_vec();

            records.push(HandleValue { handle, value });

            offset += length as usize;
        }

        Ok(Self {
            length,
            data: records,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::new();

        packet.push(Self::opcode());
        packet.push(self.length);

        for record in &self.data {
            packet.extend_from_slice(&record.handle.to_le_bytes());
            packet.extend_from_slice(&record.value);
        }

        packet
    }
}

/// Read Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse {
    /// Attribute value
    pub value: Vec<u8>,
}

impl AttPdu for ReadResponse {
    fn opcode() -> u8 {
        ATT_READ_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.is_empty() || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        Ok(Self {
            value: data[1..].to_vec(),
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(1 + self.value.len());

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.value);

        packet
    }
}

/// Write Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResponse;

impl AttPdu for WriteResponse {
    fn opcode() -> u8 {
        ATT_WRITE_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.is_empty() || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        Ok(Self)
    }

    fn serialize(&self) -> Vec<u8> {
        vec![Self::opcode()]
    }
}

/// Handle-UUID pair in a Find Information Response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleUuidPair {
    /// Attribute handle
    pub handle: u16,
    /// Attribute type
    pub uuid: Uuid,
}

/// Find Information Response packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindInformationResponse {
    /// Format of the information data (16-bit or 128-bit UUIDs)
    pub format: u8,
    /// Handle-UUID pairs
    pub data: Vec<HandleUuidPair>,
}

impl AttPdu for FindInformationResponse {
    fn opcode() -> u8 {
        ATT_FIND_INFO_RSP
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 2 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let format = data[1];
        let pair_size = match format {
            ATT_FIND_INFO_RSP_FORMAT_16BIT => 4,
            ATT_FIND_INFO_RSP_FORMAT_128BIT => 18,
            _ => return Err(AttError::InvalidPdu),
        };

        let mut pairs = Vec::new();
        let mut offset = 2;

        while offset + pair_size <= data.len() {
            let mut cursor = Cursor::new(&data[offset..]);
            let handle = read_u16(&mut cursor)?;
            let uuid = Uuid::from_wire(&data[offset + 2..offset + pair_size])
                .ok_or(AttError::InvalidPdu)?;

            pairs.push(HandleUuidPair { handle, uuid });

            offset += pair_size;
        }

        Ok(Self {
            format,
            data: pairs,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::new();

        packet.push(Self::opcode());
        packet.push(self.format);

        for pair in &self.data {
            packet.extend_from_slice(&pair.handle.to_le_bytes());
            packet.extend_from_slice(&pair.uuid.to_wire());
        }

        packet
    }
}

/// Handle Value Notification packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleValueNotification {
    /// Handle of the attribute
    pub handle: u16,
    /// Attribute value
    pub value: Vec<u8>,
}

impl AttPdu for HandleValueNotification {
    fn opcode() -> u8 {
        ATT_HANDLE_VALUE_NTF
    }

    fn parse(data: &[u8]) -> AttResult<Self> {
        if data.len() < 3 || data[0] != Self::opcode() {
            return Err(AttError::InvalidPdu);
        }

        let mut cursor = Cursor::new(&data[1..]);
        Ok(Self {
            handle: read_u16(&mut cursor)?,
            value: data[3..].to_vec(),
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(3 + self.value.len());

        packet.push(Self::opcode());
        packet.extend_from_slice(&self.handle.to_le_bytes());
        packet.extend_from_slice(&self.value);

        packet
    }
}

/// A decoded inbound ATT PDU
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttResponse {
    Error(ErrorResponse),
    FindInformation(FindInformationResponse),
    ReadByType(ReadByTypeResponse),
    Read(ReadResponse),
    ReadByGroupType(ReadByGroupTypeResponse),
    Write,
    Notification(HandleValueNotification),
    /// Opcode this client never requests; carried for diagnostics
    Other(u8, Vec<u8>),
}

impl AttResponse {
    /// The opcode byte this PDU arrived with
    pub fn opcode(&self) -> u8 {
        match self {
            AttResponse::Error(_) => ATT_ERROR_RSP,
            AttResponse::FindInformation(_) => ATT_FIND_INFO_RSP,
            AttResponse::ReadByType(_) => ATT_READ_BY_TYPE_RSP,
            AttResponse::Read(_) => ATT_READ_RSP,
            AttResponse::ReadByGroupType(_) => ATT_READ_BY_GROUP_TYPE_RSP,
            AttResponse::Write => ATT_WRITE_RSP,
            AttResponse::Notification(_) => ATT_HANDLE_VALUE_NTF,
            AttResponse::Other(opcode, _) => *opcode,
        }
    }
}

/// Decode an inbound PDU by dispatching on its first byte.
pub fn decode_response(data: &[u8]) -> AttResult<AttResponse> {
    let opcode = *data.first().ok_or(AttError::InvalidPdu)?;

    let response = match opcode {
        ATT_ERROR_RSP => AttResponse::Error(ErrorResponse::parse(data)?),
        ATT_FIND_INFO_RSP => AttResponse::FindInformation(FindInformationResponse::parse(data)?),
        ATT_READ_BY_TYPE_RSP => AttResponse::ReadByType(ReadByTypeResponse::parse(data)?),
        ATT_READ_RSP => AttResponse::Read(ReadResponse::parse(data)?),
        ATT_READ_BY_GROUP_TYPE_RSP => {
            AttResponse::ReadByGroupType(ReadByGroupTypeResponse::parse(data)?)
        }
        ATT_WRITE_RSP => {
            WriteResponse::parse(data)?;
            AttResponse::Write
        }
        ATT_HANDLE_VALUE_NTF => {
            AttResponse::Notification(HandleValueNotification::parse(data)?)
        }
        _ => AttResponse::Other(opcode, data[1..].to_vec()),
    };

    Ok(response)
}
