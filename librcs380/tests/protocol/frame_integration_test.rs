use librcs380::constants::ACK_FRAME;
use librcs380::protocol::{Frame, FrameKind};

use crate::common;

#[test]
fn frame_encode_decode_roundtrip() {
    let payload = vec![0xd7, 0x21, 0x11, 0x01];
    let encoded = Frame::encode(&payload).unwrap();
    assert_eq!(encoded, common::firmware_response());

    let decoded = Frame::decode(&encoded);
    assert_eq!(decoded.kind, FrameKind::Response);
    assert_eq!(decoded.payload, payload);
}

#[test]
fn decode_handles_padded_bulk_buffers() {
    let mut buf = common::single_byte_response();
    buf.resize(255, 0);
    assert_eq!(Frame::decode(&buf).payload, vec![0xd7, 0xd8, 0x01]);

    let mut ack = ACK_FRAME.to_vec();
    ack.resize(255, 0);
    assert!(Frame::decode(&ack).is_ack());
}

#[test]
fn corrupted_fixtures_are_malformed() {
    let good = common::no_card_response();
    for idx in 3..good.len() - 1 {
        let mut bad = good.clone();
        bad[idx] ^= 0x01;
        assert!(
            Frame::decode(&bad).is_malformed(),
            "flipping byte {} of {} went unnoticed",
            idx,
            hex::encode(&good)
        );
    }
}

#[test]
fn max_length_payload_survives_without_extra_bytes() {
    let mut payload = vec![0xd7, 0x05];
    payload.extend((0..253).map(|i| i as u8));
    let encoded = Frame::encode(&payload).unwrap();
    assert_eq!(encoded.len(), 255 + 7);

    let decoded = Frame::decode(&encoded);
    assert_eq!(decoded.payload.len(), 255);
    assert_eq!(decoded.payload, payload);
}
