// librcs380/src/prelude.rs

pub use crate::card::{CancelToken, Card, PollConfig, PollOutcome, Poller};
pub use crate::device::{ChipsetInfo, Device, DeviceBuilder, EngineConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, CommandCode, Frame, FrameKind};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "usb")]
pub use crate::transport::UsbTransport;
pub use crate::{
    Error, FirmwareVersion, Idm, Pmm, ProtocolError, Result, SystemCode, TransportError,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
