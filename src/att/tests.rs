use super::constants::*;
use super::error::AttErrorCode;
use super::pdu::*;
use super::queue::{CommandQueue, Completion, QueueOutput};
use crate::uuid::Uuid;

// --- PDU serialization ---

#[test]
fn test_read_by_group_type_request_layout() {
    let request = ReadByGroupTypeRequest {
        start_handle: 0x0001,
        end_handle: 0xffff,
        group_type: PRIMARY_SERVICE_UUID,
    };
    assert_eq!(
        request.serialize(),
        vec![0x10, 0x01, 0x00, 0xff, 0xff, 0x00, 0x28]
    );
}

#[test]
fn test_read_by_type_request_layout() {
    let request = ReadByTypeRequest {
        start_handle: 0x0010,
        end_handle: 0x0020,
        attribute_type: CHARACTERISTIC_UUID,
    };
    assert_eq!(
        request.serialize(),
        vec![0x08, 0x10, 0x00, 0x20, 0x00, 0x03, 0x28]
    );
}

#[test]
fn test_read_request_layout() {
    let request = ReadRequest { handle: 0x0017 };
    assert_eq!(request.serialize(), vec![0x0a, 0x17, 0x00]);
}

#[test]
fn test_find_information_request_layout() {
    let request = FindInformationRequest {
        start_handle: 0x0012,
        end_handle: 0x0015,
    };
    assert_eq!(request.serialize(), vec![0x04, 0x12, 0x00, 0x15, 0x00]);
}

#[test]
fn test_write_request_layout() {
    let request = WriteRequest {
        handle: 0x000e,
        value: vec![0xaa, 0xbb],
    };
    assert_eq!(request.serialize(), vec![0x12, 0x0e, 0x00, 0xaa, 0xbb]);
}

#[test]
fn test_write_command_layout() {
    let command = WriteCommand {
        handle: 0x000e,
        value: vec![0x01],
    };
    assert_eq!(command.serialize(), vec![0x52, 0x0e, 0x00, 0x01]);
}

#[test]
fn test_request_round_trips() {
    let request = ReadByGroupTypeRequest {
        start_handle: 0x0005,
        end_handle: 0x00ff,
        group_type: PRIMARY_SERVICE_UUID,
    };
    assert_eq!(
        ReadByGroupTypeRequest::parse(&request.serialize()).unwrap(),
        request
    );

    let request = WriteRequest {
        handle: 0x0042,
        value: vec![0xde, 0xad, 0xbe, 0xef],
    };
    assert_eq!(WriteRequest::parse(&request.serialize()).unwrap(), request);
}

// --- PDU parsing ---

#[test]
fn test_parse_error_response() {
    let packet = [0x01, 0x08, 0x30, 0x00, 0x0a];
    let response = ErrorResponse::parse(&packet).unwrap();
    assert_eq!(response.request_opcode, ATT_READ_BY_TYPE_REQ);
    assert_eq!(response.handle, 0x0030);
    assert_eq!(response.error_code, AttErrorCode::AttributeNotFound);
}

#[test]
fn test_parse_read_by_group_type_response_16bit() {
    // Two service records: 0x180f over [0x0001, 0x0005], 0x180d over
    // [0x0006, 0xffff]
    let packet = [
        0x11, 0x06, 0x01, 0x00, 0x05, 0x00, 0x0f, 0x18, 0x06, 0x00, 0xff, 0xff, 0x0d, 0x18,
    ];
    let response = ReadByGroupTypeResponse::parse(&packet).unwrap();
    assert_eq!(response.length, 6);
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].start_handle, 0x0001);
    assert_eq!(response.data[0].end_handle, 0x0005);
    assert_eq!(response.data[0].value, vec![0x0f, 0x18]);
    assert_eq!(response.data[1].end_handle, 0xffff);
}

#[test]
fn test_parse_read_by_group_type_response_128bit() {
    let mut packet = vec![0x11, 0x14, 0x01, 0x00, 0x08, 0x00];
    packet.extend_from_slice(&[0u8; 16]);
    let response = ReadByGroupTypeResponse::parse(&packet).unwrap();
    assert_eq!(response.length, 20);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].value.len(), 16);
}

#[test]
fn test_parse_read_by_group_type_response_rejects_short_stride() {
    assert!(ReadByGroupTypeResponse::parse(&[0x11, 0x04, 0x01, 0x00, 0x05, 0x00]).is_err());
}

#[test]
fn test_parse_read_by_type_response() {
    // One characteristic declaration: handle 0x0002, props 0x12, value
    // handle 0x0003, uuid 0x2a37
    let packet = [0x09, 0x07, 0x02, 0x00, 0x12, 0x03, 0x00, 0x37, 0x2a];
    let response = ReadByTypeResponse::parse(&packet).unwrap();
    assert_eq!(response.length, 7);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].handle, 0x0002);
    assert_eq!(response.data[0].value, vec![0x12, 0x03, 0x00, 0x37, 0x2a]);
}

#[test]
fn test_parse_read_response() {
    let response = ReadResponse::parse(&[0x0b, 0x01, 0x02, 0x03]).unwrap();
    assert_eq!(response.value, vec![0x01, 0x02, 0x03]);

    // Zero-length values are legal
    let response = ReadResponse::parse(&[0x0b]).unwrap();
    assert!(response.value.is_empty());
}

#[test]
fn test_parse_find_information_response_16bit() {
    let packet = [0x05, 0x01, 0x04, 0x00, 0x02, 0x29, 0x05, 0x00, 0x02, 0x29];
    let response = FindInformationResponse::parse(&packet).unwrap();
    assert_eq!(response.format, ATT_FIND_INFO_RSP_FORMAT_16BIT);
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].handle, 0x0004);
    assert_eq!(response.data[0].uuid, Uuid::from_u16(0x2902));
    assert_eq!(response.data[1].handle, 0x0005);
}

#[test]
fn test_parse_find_information_response_128bit() {
    let mut packet = vec![0x05, 0x02, 0x10, 0x00];
    let raw = [
        0x0f, 0x0e, 0x0d, 0x0c, 0x0b, 0x0a, 0x09, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02,
        0x01, 0x00,
    ];
    packet.extend_from_slice(&raw);
    let response = FindInformationResponse::parse(&packet).unwrap();
    assert_eq!(response.format, ATT_FIND_INFO_RSP_FORMAT_128BIT);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].handle, 0x0010);
    assert_eq!(response.data[0].uuid, Uuid::Uuid128(raw));
}

#[test]
fn test_parse_find_information_response_rejects_unknown_format() {
    assert!(FindInformationResponse::parse(&[0x05, 0x03, 0x04, 0x00, 0x02, 0x29]).is_err());
}

#[test]
fn test_parse_notification() {
    let packet = [0x1b, 0x03, 0x00, 0x40, 0x41];
    let notification = HandleValueNotification::parse(&packet).unwrap();
    assert_eq!(notification.handle, 0x0003);
    assert_eq!(notification.value, vec![0x40, 0x41]);
}

#[test]
fn test_decode_response_dispatch() {
    assert!(matches!(
        decode_response(&[0x01, 0x10, 0x01, 0x00, 0x0a]).unwrap(),
        AttResponse::Error(_)
    ));
    assert!(matches!(
        decode_response(&[0x0b, 0x2a]).unwrap(),
        AttResponse::Read(_)
    ));
    assert!(matches!(
        decode_response(&[0x13]).unwrap(),
        AttResponse::Write
    ));
}

#[test]
fn test_decode_response_unknown_opcode() {
    let response = decode_response(&[0x1d, 0x01, 0x02]).unwrap();
    assert_eq!(response, AttResponse::Other(0x1d, vec![0x01, 0x02]));
    assert_eq!(response.opcode(), 0x1d);
}

#[test]
fn test_decode_response_rejects_empty() {
    assert!(decode_response(&[]).is_err());
}

// --- Command queue ---

#[test]
fn test_queue_transmits_immediately_when_idle() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    let outputs = queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));

    assert_eq!(
        outputs,
        vec![QueueOutput::Transmit(vec![0x0a, 0x01, 0x00])]
    );
    assert!(queue.in_flight());
    assert_eq!(queue.pending_len(), 0);
}

#[test]
fn test_queue_holds_second_command_until_response() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));
    let outputs = queue.enqueue(vec![0x0a, 0x02, 0x00], Completion::OnResponse(2));

    // Nothing transmits while the first request is outstanding
    assert!(outputs.is_empty());
    assert_eq!(queue.pending_len(), 1);

    let outputs = queue.on_data(&[0x0b, 0xaa]);
    assert_eq!(
        outputs,
        vec![
            QueueOutput::Response {
                payload: 1,
                pdu: vec![0x0b, 0xaa],
            },
            QueueOutput::Transmit(vec![0x0a, 0x02, 0x00]),
        ]
    );
    assert!(queue.in_flight());
}

#[test]
fn test_queue_drains_fifo_on_response() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));
    queue.enqueue(vec![0x0a, 0x02, 0x00], Completion::OnResponse(2));
    queue.enqueue(vec![0x0a, 0x03, 0x00], Completion::OnResponse(3));

    queue.on_data(&[0x0b, 0x01]);
    let outputs = queue.on_data(&[0x0b, 0x02]);

    // The second command completes and the third goes out, in arrival order
    assert_eq!(
        outputs,
        vec![
            QueueOutput::Response {
                payload: 2,
                pdu: vec![0x0b, 0x02],
            },
            QueueOutput::Transmit(vec![0x0a, 0x03, 0x00]),
        ]
    );
}

#[test]
fn test_queue_sent_only_commands_complete_on_transmission() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    let outputs = queue.enqueue(vec![0x52, 0x05, 0x00, 0x01], Completion::OnSent(7));

    assert_eq!(
        outputs,
        vec![
            QueueOutput::Transmit(vec![0x52, 0x05, 0x00, 0x01]),
            QueueOutput::Sent(7),
        ]
    );
    // An unacknowledged write never occupies the in-flight slot
    assert!(!queue.in_flight());
}

#[test]
fn test_queue_drains_past_sent_only_commands() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));
    queue.enqueue(vec![0x52, 0x05, 0x00, 0x01], Completion::OnSent(2));
    queue.enqueue(vec![0x0a, 0x03, 0x00], Completion::OnResponse(3));

    let outputs = queue.on_data(&[0x0b, 0xaa]);
    assert_eq!(
        outputs,
        vec![
            QueueOutput::Response {
                payload: 1,
                pdu: vec![0x0b, 0xaa],
            },
            QueueOutput::Transmit(vec![0x52, 0x05, 0x00, 0x01]),
            QueueOutput::Sent(2),
            QueueOutput::Transmit(vec![0x0a, 0x03, 0x00]),
        ]
    );
    assert!(queue.in_flight());
}

#[test]
fn test_queue_suppresses_transport_echo() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));
    queue.enqueue(vec![0x0a, 0x02, 0x00], Completion::OnResponse(2));

    // The channel loops our own request bytes back before the response
    let outputs = queue.on_data(&[0x0a, 0x01, 0x00]);
    assert_eq!(outputs, vec![QueueOutput::Echo]);
    assert!(queue.in_flight());
    assert_eq!(queue.pending_len(), 1);

    // The real response still completes the same command
    let outputs = queue.on_data(&[0x0b, 0xaa]);
    assert!(matches!(
        outputs[0],
        QueueOutput::Response { payload: 1, .. }
    ));
}

#[test]
fn test_queue_discards_unsolicited_pdu() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    let outputs = queue.on_data(&[0x0b, 0xaa]);
    assert_eq!(outputs, vec![QueueOutput::Discarded(vec![0x0b, 0xaa])]);
}

#[test]
fn test_queue_clear_abandons_everything() {
    let mut queue: CommandQueue<u32> = CommandQueue::new();
    queue.enqueue(vec![0x0a, 0x01, 0x00], Completion::OnResponse(1));
    queue.enqueue(vec![0x0a, 0x02, 0x00], Completion::OnResponse(2));

    queue.clear();
    assert!(!queue.in_flight());
    assert_eq!(queue.pending_len(), 0);

    // A late response after clearing is unsolicited
    let outputs = queue.on_data(&[0x0b, 0xaa]);
    assert_eq!(outputs, vec![QueueOutput::Discarded(vec![0x0b, 0xaa])]);
}
