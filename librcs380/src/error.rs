// librcs380/src/error.rs

use thiserror::Error;

/// Failures at the byte transport boundary.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("device not found")]
    DeviceNotFound,

    #[error("transport is not open")]
    NotOpen,

    #[error("transfer timed out")]
    Timeout,

    #[error("device disconnected")]
    Disconnected,

    #[error("i/o error: {0}")]
    Io(String),

    // rusb stays an optional dependency so the protocol core builds without libusb
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),
}

/// Failures of a single command-response exchange.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("malformed frame where an ACK was expected")]
    BadAck,

    #[error("malformed response frame")]
    BadResponse,

    #[error("device answered without an ACK")]
    UnexpectedResponse,

    #[error("response does not match command: expected {expected:#04x}, got {actual:#04x}")]
    Mismatch { expected: u8, actual: u8 },

    #[error("no frame arrived before the read timeout")]
    Timeout,
}

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport write failed: {0}")]
    TransportWrite(#[source] TransportError),

    #[error("transport read failed: {0}")]
    TransportRead(#[source] TransportError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("polling failed after {attempts} attempts: {reason}")]
    PollingFailed { attempts: u32, reason: String },

    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// True when retrying the whole exchange may succeed without reopening
    /// the transport.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Protocol(
                ProtocolError::BadAck
                    | ProtocolError::BadResponse
                    | ProtocolError::UnexpectedResponse
                    | ProtocolError::Timeout
            )
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
