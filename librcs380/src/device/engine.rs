// librcs380/src/device/engine.rs

use log::{debug, trace, warn};

use crate::constants::ACK_FRAME;
use crate::device::config::EngineConfig;
use crate::protocol::{Command, Frame, FrameKind, codec};
use crate::transport::Transport;
use crate::utils::{bytes_to_hex_spaced, trim_padding};
use crate::{Error, ProtocolError, Result, TransportError};

/// Command-response engine. Owns the transport and runs one exchange at a
/// time: write the command frame, read the ACK, read the response.
///
/// There are no sequence numbers on the wire, so a second command must never
/// be written before the first one's response has been read; `send` takes
/// `&mut self` for that reason.
pub struct Engine {
    transport: Box<dyn Transport>,
    config: EngineConfig,
    open: bool,
}

impl Engine {
    /// Open `transport` and take ownership of it. If opening fails the
    /// transport is closed again before the error is returned.
    pub fn open(mut transport: Box<dyn Transport>, config: EngineConfig) -> Result<Self> {
        if let Err(e) = transport.open() {
            if let Err(close_err) = transport.close() {
                warn!("close after failed open also failed: {}", close_err);
            }
            return Err(Error::Transport(e));
        }
        Ok(Self {
            transport,
            config,
            open: true,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Run one exchange and return the command's result data (the response
    /// payload after 0xD7 and the echoed code). No retry happens here.
    pub fn send(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let frame = codec::encode_command_frame(cmd)?;
        debug!("send {}", describe(cmd));
        self.write(&frame)?;

        match self.read_frame()?.kind {
            FrameKind::Ack => {}
            // the chipset skipped the ACK phase
            FrameKind::Response => return Err(ProtocolError::UnexpectedResponse.into()),
            FrameKind::Malformed => return Err(ProtocolError::BadAck.into()),
        }

        let response = self.read_frame()?;
        if response.kind != FrameKind::Response {
            return Err(ProtocolError::BadResponse.into());
        }
        let data = codec::correlate(cmd.code(), &response.payload)?;
        Ok(data.to_vec())
    }

    /// Write the ACK frame, which makes the chipset drop whatever command
    /// it is processing.
    pub fn abort(&mut self) -> Result<()> {
        debug!("abort");
        self.write(&ACK_FRAME)
    }

    /// Release the transport. Calling it again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.transport.close().map_err(Error::Transport)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.open {
            return Err(Error::TransportWrite(TransportError::NotOpen));
        }
        trace!(">> {}", bytes_to_hex_spaced(bytes));
        self.transport.write(bytes).map_err(Error::TransportWrite)
    }

    fn read_frame(&mut self) -> Result<Frame> {
        if !self.open {
            return Err(Error::TransportRead(TransportError::NotOpen));
        }
        let buf = match self
            .transport
            .read(self.config.max_frame_len, self.config.read_timeout)
        {
            Ok(buf) => buf,
            Err(TransportError::Timeout) => return Err(ProtocolError::Timeout.into()),
            Err(e) => return Err(Error::TransportRead(e)),
        };
        trace!("<< {}", bytes_to_hex_spaced(trim_padding(&buf)));
        Ok(Frame::decode(&buf))
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("closing transport failed: {}", e);
        }
    }
}

fn describe(cmd: &Command) -> String {
    match cmd.name() {
        Some(name) => format!("{:?} ({} data bytes)", name, cmd.data().len()),
        None => format!("command {:#04x} ({} data bytes)", cmd.code(), cmd.data().len()),
    }
}
