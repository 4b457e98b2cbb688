// librcs380/src/protocol/commands/rf.rs

//! RF field setup and raw RF exchange commands.

use std::time::Duration;

use super::{Command, CommandCode};

/// InSetRF for 212 kbps Type F (send and receive settings).
pub const IN_SET_RF_TYPE_F_212: [u8; 4] = [0x01, 0x01, 0x0f, 0x01];

/// InSetProtocol default table: (parameter number, value) pairs.
pub const IN_SET_PROTOCOL_DEFAULTS: [u8; 38] = [
    0x00, 0x18, 0x01, 0x01, 0x02, 0x01, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0x07,
    0x08, 0x08, 0x00, 0x09, 0x00, 0x0a, 0x00, 0x0b, 0x00, 0x0c, 0x00, 0x0e, 0x04, 0x0f, 0x00,
    0x10, 0x00, 0x11, 0x00, 0x12, 0x00, 0x13, 0x06,
];

/// InSetProtocol override applied after the defaults for Type F.
pub const IN_SET_PROTOCOL_TYPE_F: [u8; 2] = [0x00, 0x18];

pub fn in_set_rf(settings: [u8; 4]) -> Command {
    Command::new(CommandCode::InSetRf, settings)
}

pub fn in_set_protocol(params: &[u8]) -> Command {
    Command::new(CommandCode::InSetProtocol, params)
}

pub fn in_set_protocol_defaults() -> Command {
    in_set_protocol(&IN_SET_PROTOCOL_DEFAULTS)
}

/// InCommRF: send `frame` to the card and wait up to `timeout` for its
/// answer. The chipset counts the timeout in 0.1 ms units, little-endian;
/// longer timeouts saturate at 0xFFFF.
pub fn in_comm_rf(timeout: Duration, frame: &[u8]) -> Command {
    let units = u16::try_from(timeout.as_micros() / 100).unwrap_or(u16::MAX);
    let mut data = Vec::with_capacity(2 + frame.len());
    data.extend_from_slice(&units.to_le_bytes());
    data.extend_from_slice(frame);
    Command::new(CommandCode::InCommRf, data)
}
