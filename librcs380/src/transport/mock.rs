// librcs380/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::TransportError;
use crate::transport::traits::{Transport, TransportResult};

#[derive(Debug, Default)]
struct MockState {
    open: bool,
    fail_open: bool,
    write_failures: usize,
    pad_reads: bool,
    reads: VecDeque<TransportResult<Vec<u8>>>,
    writes: Vec<Vec<u8>>,
    read_calls: Vec<(usize, Duration)>,
    open_count: usize,
    close_count: usize,
}

/// Mock transport for tests. Reads are served from a script in order and
/// every write is recorded; an empty script reads as `Timeout`.
///
/// Clones share state, so a test can keep one handle while a device owns
/// the other.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // a panicking test thread must not hide the recorded state
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue one inbound transfer.
    pub fn push_read(&self, data: Vec<u8>) {
        self.state().reads.push_back(Ok(data));
    }

    /// Queue a failing read.
    pub fn push_read_error(&self, err: TransportError) {
        self.state().reads.push_back(Err(err));
    }

    /// Zero pad every read to the requested capacity, like a fixed-size
    /// bulk buffer.
    pub fn set_pad_reads(&self, pad: bool) {
        self.state().pad_reads = pad;
    }

    /// Make the next `n` writes fail with `Disconnected`.
    pub fn set_write_failures(&self, n: usize) {
        self.state().write_failures = n;
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.state().fail_open = fail;
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state().writes.clone()
    }

    /// (capacity, timeout) of every read call, in order.
    pub fn read_calls(&self) -> Vec<(usize, Duration)> {
        self.state().read_calls.clone()
    }

    pub fn pending_reads(&self) -> usize {
        self.state().reads.len()
    }

    pub fn is_open(&self) -> bool {
        self.state().open
    }

    pub fn open_count(&self) -> usize {
        self.state().open_count
    }

    pub fn close_count(&self) -> usize {
        self.state().close_count
    }
}

impl Transport for MockTransport {
    fn open(&mut self) -> TransportResult<()> {
        let mut s = self.state();
        s.open_count += 1;
        if s.fail_open {
            return Err(TransportError::DeviceNotFound);
        }
        s.open = true;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> TransportResult<()> {
        let mut s = self.state();
        if !s.open {
            return Err(TransportError::NotOpen);
        }
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(TransportError::Disconnected);
        }
        s.writes.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, capacity: usize, timeout: Duration) -> TransportResult<Vec<u8>> {
        let mut s = self.state();
        if !s.open {
            return Err(TransportError::NotOpen);
        }
        s.read_calls.push((capacity, timeout));
        let mut data = s.reads.pop_front().unwrap_or(Err(TransportError::Timeout))?;
        data.truncate(capacity);
        if s.pad_reads {
            data.resize(capacity, 0);
        }
        Ok(data)
    }

    fn close(&mut self) -> TransportResult<()> {
        let mut s = self.state();
        s.close_count += 1;
        s.open = false;
        Ok(())
    }
}
