// librcs380/src/card/config.rs

//! Polling configuration

use std::time::Duration;

use crate::protocol::commands::polling::REQUEST_SYSTEM_CODE;
use crate::types::SystemCode;

/// Delay between two polls (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Consecutive failed exchanges tolerated before polling gives up
pub const DEFAULT_MAX_CONSECUTIVE_FAILURES: u32 = 8;

/// How long the chipset listens for a card answer (µs). Encodes as 0x006e.
pub const DEFAULT_RF_TIMEOUT_US: u64 = 11_000;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollConfig {
    pub interval: Duration,
    /// `None` polls until a card, a failure or cancellation.
    pub max_iterations: Option<u32>,
    pub max_consecutive_failures: u32,
    pub rf_timeout: Duration,
    pub system_code: SystemCode,
    pub request_code: u8,
    pub time_slot: u8,
}

impl PollConfig {
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn max_iterations(mut self, n: Option<u32>) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn max_consecutive_failures(mut self, n: u32) -> Self {
        self.max_consecutive_failures = n;
        self
    }

    pub fn rf_timeout(mut self, timeout: Duration) -> Self {
        self.rf_timeout = timeout;
        self
    }

    pub fn system_code(mut self, system_code: SystemCode) -> Self {
        self.system_code = system_code;
        self
    }

    pub fn request_code(mut self, request_code: u8) -> Self {
        self.request_code = request_code;
        self
    }

    pub fn time_slot(mut self, time_slot: u8) -> Self {
        self.time_slot = time_slot;
        self
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_iterations: None,
            max_consecutive_failures: DEFAULT_MAX_CONSECUTIVE_FAILURES,
            rf_timeout: Duration::from_micros(DEFAULT_RF_TIMEOUT_US),
            system_code: SystemCode::ANY,
            request_code: REQUEST_SYSTEM_CODE,
            time_slot: 0,
        }
    }
}
