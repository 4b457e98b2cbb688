// librcs380/src/protocol/responses/version.rs

use crate::protocol::parser::slice_at;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode the result of GetFirmwareVersion / GetPDDataVersion: `[minor, major]`.
pub fn decode_version(data: &[u8]) -> Result<FirmwareVersion> {
    let b = slice_at(data, 0, 2)?;
    Ok(FirmwareVersion::new(b[1], b[0]))
}
