// librcs380/src/protocol/commands/chipset.rs

//! Reader-side commands that do not touch the RF field protocol.

use super::{Command, CommandCode};

/// SetCommandType: 0x01 selects the command set used by this crate.
pub fn set_command_type() -> Command {
    Command::new(CommandCode::SetCommandType, [0x01])
}

pub fn get_firmware_version() -> Command {
    Command::new(CommandCode::GetFirmwareVersion, Vec::new())
}

pub fn get_pd_data_version() -> Command {
    Command::new(CommandCode::GetPdDataVersion, Vec::new())
}

/// SwitchRF: `false` turns the RF field off.
pub fn switch_rf(on: bool) -> Command {
    Command::new(CommandCode::SwitchRf, [on as u8])
}
