// librcs380/src/device/builder.rs

use std::time::Duration;

use crate::device::config::EngineConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result, TransportError};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: EngineConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use the first RC-S380 found on the USB bus.
    #[cfg(feature = "usb")]
    pub fn usb(self) -> Self {
        self.with_transport(Box::new(crate::transport::UsbTransport::new()))
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.read_timeout(timeout);
        self
    }

    pub fn max_frame_len(mut self, len: usize) -> Self {
        self.config = self.config.max_frame_len(len);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder, open the transport and return an uninitialized
    /// Device. Requires a transport; otherwise returns DeviceNotFound.
    pub fn open(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Device::open_with_config(t, self.config),
            None => Err(Error::Transport(TransportError::DeviceNotFound)),
        }
    }
}
