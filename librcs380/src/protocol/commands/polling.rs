// librcs380/src/protocol/commands/polling.rs

use std::time::Duration;

use super::Command;
use super::rf::in_comm_rf;
use crate::types::SystemCode;

/// FeliCa Polling command code, carried inside InCommRF.
pub const FELICA_POLLING: u8 = 0x00;

/// Request code asking the card to append its system code.
pub const REQUEST_SYSTEM_CODE: u8 = 0x01;

/// Encode the FeliCa Polling frame sent over the air. The leading byte is
/// the frame length including itself.
pub fn encode_polling(system_code: SystemCode, request_code: u8, time_slot: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6);
    buf.push(6);
    buf.push(FELICA_POLLING);
    buf.extend_from_slice(&system_code.to_be_bytes());
    buf.push(request_code);
    buf.push(time_slot);
    buf
}

/// InCommRF carrying a FeliCa Polling frame.
pub fn in_comm_rf_polling(
    rf_timeout: Duration,
    system_code: SystemCode,
    request_code: u8,
    time_slot: u8,
) -> Command {
    in_comm_rf(rf_timeout, &encode_polling(system_code, request_code, time_slot))
}
