// librcs380/src/protocol/commands/mod.rs

pub mod chipset;
pub mod polling;
pub mod rf;

pub use chipset::{get_firmware_version, get_pd_data_version, set_command_type, switch_rf};
pub use polling::{encode_polling, in_comm_rf_polling};
pub use rf::{in_comm_rf, in_set_protocol, in_set_protocol_defaults, in_set_rf};

use crate::constants::{DIRECTION_HOST, MAX_COMMAND_DATA_LEN};
use crate::{Error, Result};

/// Chipset command codes. Each response echoes `code + 1`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    InSetRf = 0x00,
    InSetProtocol = 0x02,
    InCommRf = 0x04,
    SwitchRf = 0x06,
    GetFirmwareVersion = 0x20,
    GetPdDataVersion = 0x22,
    SetCommandType = 0x2A,
}

impl CommandCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Code the chipset puts after 0xD7 in the matching response.
    pub fn response_code(self) -> u8 {
        self.as_u8().wrapping_add(1)
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::InSetRf),
            0x02 => Some(Self::InSetProtocol),
            0x04 => Some(Self::InCommRf),
            0x06 => Some(Self::SwitchRf),
            0x20 => Some(Self::GetFirmwareVersion),
            0x22 => Some(Self::GetPdDataVersion),
            0x2A => Some(Self::SetCommandType),
            _ => None,
        }
    }
}

/// A chipset command: code plus its parameter bytes. The codec adds the
/// 0xD6 direction byte when framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    code: u8,
    data: Vec<u8>,
}

impl Command {
    pub fn new(code: CommandCode, data: impl Into<Vec<u8>>) -> Self {
        Self::raw(code.as_u8(), data)
    }

    /// Command with an arbitrary code, for codes this crate has no name for.
    pub fn raw(code: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Symbolic name for logs, `None` for raw codes.
    pub fn name(&self) -> Option<CommandCode> {
        CommandCode::from_u8(self.code)
    }

    /// Encode the frame payload: direction byte, code, data.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > MAX_COMMAND_DATA_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_COMMAND_DATA_LEN,
                actual: self.data.len(),
            });
        }
        let mut buf = Vec::with_capacity(2 + self.data.len());
        buf.push(DIRECTION_HOST);
        buf.push(self.code);
        buf.extend_from_slice(&self.data);
        Ok(buf)
    }
}
