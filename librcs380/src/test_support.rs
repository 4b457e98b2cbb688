// librcs380/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{ACK_FRAME, DIRECTION_DEVICE};
use crate::device::{Device, Initialized};
use crate::protocol::Frame;
use crate::transport::MockTransport;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Firmware and PD-data version replies used by `seed_initialization`
/// (1.11 and 1.00).
pub const SAMPLE_FIRMWARE_DATA: [u8; 2] = [0x11, 0x01];
pub const SAMPLE_PD_DATA: [u8; 2] = [0x00, 0x01];

/// InCommRF result data reported when no card answered.
pub const NO_CARD_DATA: [u8; 4] = [0x80, 0x00, 0x00, 0x00];

#[doc(hidden)]
pub fn ack() -> Vec<u8> {
    ACK_FRAME.to_vec()
}

/// Wire frame answering command `code` with result `data`.
#[doc(hidden)]
pub fn response_frame(code: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![DIRECTION_DEVICE, code.wrapping_add(1)];
    payload.extend_from_slice(data);
    // test payloads stay far below the frame limit
    Frame::encode(&payload).unwrap_or_default()
}

/// Queue the ACK and the response for one exchange.
#[doc(hidden)]
pub fn seed_exchange(mock: &MockTransport, code: u8, data: &[u8]) {
    mock.push_read(ack());
    mock.push_read(response_frame(code, data));
}

/// Queue the replies for the whole `Device::initialize` sequence.
#[doc(hidden)]
pub fn seed_initialization(mock: &MockTransport) {
    seed_exchange(mock, 0x2a, &[]);
    seed_exchange(mock, 0x20, &SAMPLE_FIRMWARE_DATA);
    seed_exchange(mock, 0x22, &SAMPLE_PD_DATA);
    seed_exchange(mock, 0x06, &[]);
    seed_exchange(mock, 0x00, &[]);
    seed_exchange(mock, 0x02, &[]);
    seed_exchange(mock, 0x02, &[]);
}

/// Convenience: open and initialize a Device backed by `mock`. The mock is
/// shared, so the caller can keep seeding it afterwards.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    seed_initialization(mock);
    Device::open(Box::new(mock.clone()))?.initialize()
}

/// InCommRF result data for a Type F polling answer: four status bytes, one
/// reserved byte, then the FeliCa response frame (length, 0x01, IDm, PMm and
/// the system code when present).
#[doc(hidden)]
pub fn felica_poll_data(idm: Idm, pmm: Pmm, system_code: Option<SystemCode>) -> Vec<u8> {
    let len = if system_code.is_some() { 0x14 } else { 0x12 };
    let mut data = vec![0x00, 0x00, 0x00, 0x00, 0x00, len, 0x01];
    data.extend_from_slice(idm.as_bytes());
    data.extend_from_slice(pmm.as_bytes());
    if let Some(sc) = system_code {
        data.extend_from_slice(&sc.to_be_bytes());
    }
    data
}

/// Queue one polling exchange that finds a card.
#[doc(hidden)]
pub fn seed_card(mock: &MockTransport, idm: Idm, pmm: Pmm, system_code: Option<SystemCode>) {
    seed_exchange(mock, 0x04, &felica_poll_data(idm, pmm, system_code));
}

/// Queue one polling exchange with no card in the field.
#[doc(hidden)]
pub fn seed_no_card(mock: &MockTransport) {
    seed_exchange(mock, 0x04, &NO_CARD_DATA);
}
