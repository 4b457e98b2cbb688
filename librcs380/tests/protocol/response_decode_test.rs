use librcs380::card::{PollOutcome, classify};
use librcs380::protocol::{Frame, correlate, decode_version};
use librcs380::{FirmwareVersion, ProtocolError};

use crate::common;

#[test]
fn firmware_version_from_fixture() {
    let frame = Frame::decode(&common::firmware_response());
    let data = correlate(0x20, &frame.payload).unwrap();
    assert_eq!(decode_version(data).unwrap(), FirmwareVersion::new(0x01, 0x11));
}

#[test]
fn single_byte_result() {
    let frame = Frame::decode(&common::single_byte_response());
    assert_eq!(correlate(0xd7, &frame.payload).unwrap(), &[0x01]);
}

#[test]
fn stale_response_does_not_correlate() {
    let frame = Frame::decode(&common::no_card_response());
    assert_eq!(
        correlate(0x20, &frame.payload),
        Err(ProtocolError::Mismatch {
            expected: 0x21,
            actual: 0x05
        })
    );
}

#[test]
fn poll_results_classify() {
    let frame = Frame::decode(&common::no_card_response());
    let data = correlate(0x04, &frame.payload).unwrap();
    assert_eq!(classify(data), PollOutcome::NoCard);

    let data = common::felica_poll_data(
        common::sample_idm(),
        common::sample_pmm(),
        Some(common::sample_system_code()),
    );
    let response = common::response_frame(0x04, &data);
    let frame = Frame::decode(&response);
    match classify(correlate(0x04, &frame.payload).unwrap()) {
        PollOutcome::Felica(card) => {
            assert_eq!(card.idm(), &common::sample_idm());
            assert_eq!(card.pmm(), &common::sample_pmm());
            assert_eq!(card.system_code(), Some(common::sample_system_code()));
        }
        other => panic!("expected Felica, got {:?}", other),
    }
}
