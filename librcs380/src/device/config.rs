// librcs380/src/device/config.rs

//! Engine configuration

use std::time::Duration;

use crate::constants::DEFAULT_FRAME_CAPACITY;

/// Read timeout (ms) applied to both the ACK read and the response read
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub read_timeout: Duration,
    /// Capacity requested from the transport for every read.
    pub max_frame_len: usize,
}

impl EngineConfig {
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn max_frame_len(mut self, len: usize) -> Self {
        self.max_frame_len = len;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            max_frame_len: DEFAULT_FRAME_CAPACITY,
        }
    }
}
