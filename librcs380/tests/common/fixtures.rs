// fixtures.rs: provides commonly used wire frames and identifiers

use librcs380::types::{Idm, Pmm, SystemCode};

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x2e, 0x4c, 0xd1, 0x82, 0x0a, 0x5f, 0x33]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x03, 0x01, 0x4b, 0x02, 0x4f, 0x49, 0x93, 0xff]
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

pub fn sample_system_code() -> SystemCode {
    SystemCode::SUICA
}

/// Decode a hex fixture, ignoring spaces.
pub fn frame(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).expect("valid hex fixture")
}

/// SetCommandType(0x01) as written by the host
pub fn set_command_type_frame() -> Vec<u8> {
    frame("0000ff 03 fd d6 2a 01 ff 00")
}

/// Answer to SetCommandType
pub fn set_command_type_response() -> Vec<u8> {
    frame("0000ff 02 fe d7 2b fe 00")
}

/// GetFirmwareVersion answered with 1.11
pub fn firmware_response() -> Vec<u8> {
    frame("0000ff 04 fc d7 21 11 01 f6 00")
}

/// InCommRF answered with "no card"
pub fn no_card_response() -> Vec<u8> {
    frame("0000ff 06 fa d7 05 80 00 00 00 a4 00")
}

/// Response to a command with code 0xD7 carrying one result byte
pub fn single_byte_response() -> Vec<u8> {
    frame("0000ff 03 fd d7 d8 01 50 00")
}
