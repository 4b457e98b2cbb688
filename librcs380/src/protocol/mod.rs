// librcs380/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use codec::{correlate, encode_command_frame};
pub use commands::{Command, CommandCode};
pub use frame::{Frame, FrameKind};
pub use responses::*;
