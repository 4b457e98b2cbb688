// librcs380/src/protocol/codec.rs

use crate::constants::DIRECTION_DEVICE;
use crate::{ProtocolError, Result};

use super::Frame;
use super::commands::Command;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let payload = cmd.encode()?;
    Frame::encode(&payload)
}

/// Check that a response payload answers `code` (0xD7, `code + 1`) and
/// return the result data that follows those two bytes.
pub fn correlate(code: u8, payload: &[u8]) -> std::result::Result<&[u8], ProtocolError> {
    let expected = code.wrapping_add(1);
    match payload {
        [DIRECTION_DEVICE, actual, data @ ..] if *actual == expected => Ok(data),
        [DIRECTION_DEVICE, actual, ..] => Err(ProtocolError::Mismatch {
            expected,
            actual: *actual,
        }),
        [direction, ..] => Err(ProtocolError::Mismatch {
            expected: DIRECTION_DEVICE,
            actual: *direction,
        }),
        [] => Err(ProtocolError::Mismatch {
            expected: DIRECTION_DEVICE,
            actual: 0,
        }),
    }
}
