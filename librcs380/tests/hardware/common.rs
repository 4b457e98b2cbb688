#![cfg(feature = "usb")]

//! Helpers for tests against a real reader. Without a reader attached
//! (CI and the like) they return `Ok(None)`.

use librcs380::device::{Device, Initialized};
use librcs380::transport::UsbTransport;
use librcs380::{Error, Result, TransportError};

/// Open and initialize the first RC-S380 on the bus.
///
/// - Ok(Some(device)) : reader found and initialized
/// - Ok(None) : no reader attached
/// - Err(e) : any other failure
pub fn open_and_initialize_device() -> Result<Option<Device<Initialized>>> {
    let _ = env_logger::builder().is_test(true).try_init();
    match Device::open(Box::new(UsbTransport::new())) {
        Ok(device) => Ok(Some(device.initialize()?)),
        Err(Error::Transport(TransportError::DeviceNotFound)) => Ok(None),
        Err(e) => Err(e),
    }
}
