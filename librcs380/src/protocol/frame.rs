// librcs380/src/protocol/frame.rs

use crate::constants::{
    ACK_FRAME, FRAME_OVERHEAD, FRAME_POSTAMBLE, FRAME_PREAMBLE, MAX_PAYLOAD_LEN,
};
use crate::protocol::checksum::{dcs, dcs_valid, lcs, lcs_valid};
use crate::{Error, Result};

/// What a received buffer turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Ack,
    Response,
    Malformed,
}

/// Chipset wire frame.
///
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
///
/// The payload starts with the direction byte (0xD6 host->device, 0xD7
/// device->host) followed by the command code and its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn ack() -> Self {
        Self {
            kind: FrameKind::Ack,
            payload: Vec::new(),
        }
    }

    pub fn malformed() -> Self {
        Self {
            kind: FrameKind::Malformed,
            payload: Vec::new(),
        }
    }

    pub fn response(payload: Vec<u8>) -> Self {
        Self {
            kind: FrameKind::Response,
            payload,
        }
    }

    pub fn is_ack(&self) -> bool {
        self.kind == FrameKind::Ack
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == FrameKind::Malformed
    }

    /// Encode a payload into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() || payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a received buffer. Never fails: anything that is neither the
    /// ACK literal nor a checksum-valid frame comes back as `Malformed`.
    ///
    /// The buffer may be the exact transfer or zero padded up to the read
    /// capacity; bytes after the DCS (postamble, padding) are not inspected.
    pub fn decode(buf: &[u8]) -> Frame {
        if buf.starts_with(&ACK_FRAME) {
            return Frame::ack();
        }

        let Some(start) = buf.windows(3).position(|w| w == FRAME_PREAMBLE) else {
            return Frame::malformed();
        };
        let header = &buf[start + FRAME_PREAMBLE.len()..];
        let (len, lcs_byte) = match header {
            [len, lcs_byte, ..] => (*len, *lcs_byte),
            _ => return Frame::malformed(),
        };
        if len == 0 || !lcs_valid(len, lcs_byte) {
            return Frame::malformed();
        }

        let body = &header[2..];
        let len = len as usize;
        // payload plus its DCS byte
        if body.len() < len + 1 {
            return Frame::malformed();
        }
        let payload = &body[..len];
        if !dcs_valid(payload, body[len]) {
            return Frame::malformed();
        }

        Frame::response(payload.to_vec())
    }
}
