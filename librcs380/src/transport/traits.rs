// librcs380/src/transport/traits.rs

use std::time::Duration;

use crate::TransportError;

pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Duplex byte channel to the reader. Transport abstracts I/O away from
/// protocol/device logic; one `write` is one outbound transfer and one
/// `read` is one inbound transfer.
pub trait Transport: Send {
    /// Acquire the device (claim interface, open endpoints).
    fn open(&mut self) -> TransportResult<()>;

    /// Submit one outbound transfer.
    fn write(&mut self, data: &[u8]) -> TransportResult<()>;

    /// Block until one inbound transfer arrives or `timeout` elapses. The
    /// result is at most `capacity` bytes; it may be the exact transfer or
    /// zero padded to `capacity`.
    fn read(&mut self, capacity: usize, timeout: Duration) -> TransportResult<Vec<u8>>;

    /// Release the device. Must be safe to call more than once and after a
    /// partially failed `open`.
    fn close(&mut self) -> TransportResult<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self) -> TransportResult<()> {
        (**self).open()
    }

    fn write(&mut self, data: &[u8]) -> TransportResult<()> {
        (**self).write(data)
    }

    fn read(&mut self, capacity: usize, timeout: Duration) -> TransportResult<Vec<u8>> {
        (**self).read(capacity, timeout)
    }

    fn close(&mut self) -> TransportResult<()> {
        (**self).close()
    }
}
