// librcs380/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, DeviceHandle, UsbContext};

use crate::TransportError;
use crate::constants::{RCS380_PRODUCT_ID, RCS380S_PRODUCT_ID, SONY_VENDOR_ID};
use crate::transport::traits::{Transport, TransportResult};

mod descriptor;
pub use descriptor::{BulkEndpoints, find_bulk_endpoints};

/// Write timeout for bulk OUT transfers. Reads take their timeout from the
/// caller.
const WRITE_TIMEOUT: Duration = Duration::from_millis(1000);

struct Opened {
    handle: DeviceHandle<Context>,
    endpoints: BulkEndpoints,
    detached_kernel_driver: bool,
}

/// Bulk-transfer transport for RC-S380 readers. It is feature-gated behind
/// `--features usb` and requires the `rusb` crate.
///
/// `open` picks the first device on the bus matching one of the configured
/// vendor/product ids. `rusb` hands out a flat device list, so hubs need no
/// traversal.
pub struct UsbTransport {
    ids: Vec<(u16, u16)>,
    opened: Option<Opened>,
}

impl UsbTransport {
    /// Transport matching the RC-S380 and RC-S380/S.
    pub fn new() -> Self {
        Self::with_ids(vec![
            (SONY_VENDOR_ID, RCS380_PRODUCT_ID),
            (SONY_VENDOR_ID, RCS380S_PRODUCT_ID),
        ])
    }

    pub fn with_ids(ids: Vec<(u16, u16)>) -> Self {
        Self { ids, opened: None }
    }

    /// Manufacturer and product strings of the opened device.
    pub fn describe(&self) -> TransportResult<(String, String)> {
        let opened = self.opened.as_ref().ok_or(TransportError::NotOpen)?;
        let device = opened.handle.device();
        let dd = device.device_descriptor()?;
        let manufacturer = opened
            .handle
            .read_manufacturer_string_ascii(&dd)
            .unwrap_or_default();
        let product = opened
            .handle
            .read_product_string_ascii(&dd)
            .unwrap_or_default();
        Ok((manufacturer, product))
    }

    fn find_device(&self, ctx: &Context) -> TransportResult<rusb::Device<Context>> {
        for device in ctx.devices()?.iter() {
            let Ok(dd) = device.device_descriptor() else {
                continue;
            };
            if self
                .ids
                .iter()
                .any(|&(vid, pid)| dd.vendor_id() == vid && dd.product_id() == pid)
            {
                debug!(
                    "found reader {:04x}:{:04x} on bus {} address {}",
                    dd.vendor_id(),
                    dd.product_id(),
                    device.bus_number(),
                    device.address()
                );
                return Ok(device);
            }
        }
        Err(TransportError::DeviceNotFound)
    }

    fn opened(&mut self) -> TransportResult<&mut Opened> {
        self.opened.as_mut().ok_or(TransportError::NotOpen)
    }
}

impl Default for UsbTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_usb_error(err: rusb::Error) -> TransportError {
    match err {
        rusb::Error::Timeout => TransportError::Timeout,
        rusb::Error::NoDevice => TransportError::Disconnected,
        other => TransportError::Usb(other),
    }
}

fn claim(handle: &mut DeviceHandle<Context>, endpoints: &BulkEndpoints) -> rusb::Result<()> {
    handle.set_active_configuration(endpoints.config)?;
    handle.claim_interface(endpoints.interface)?;
    handle.set_alternate_setting(endpoints.interface, endpoints.setting)
}

fn reattach_kernel_driver(handle: &mut DeviceHandle<Context>, interface: u8) {
    check_reattach(handle.attach_kernel_driver(interface));
}

/// Log a failed kernel driver reattach; returns whether it succeeded.
fn check_reattach(result: rusb::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("could not reattach kernel driver: {}", e);
            false
        }
    }
}

impl Transport for UsbTransport {
    fn open(&mut self) -> TransportResult<()> {
        if self.opened.is_some() {
            return Ok(());
        }
        let ctx = Context::new()?;
        let device = self.find_device(&ctx)?;
        let endpoints = find_bulk_endpoints(&device).ok_or(TransportError::DeviceNotFound)?;
        let mut handle = device.open()?;

        // The kernel may have bound a driver (e.g. port100) to the reader.
        let detached_kernel_driver = match handle.kernel_driver_active(endpoints.interface) {
            Ok(true) => {
                handle.detach_kernel_driver(endpoints.interface)?;
                true
            }
            _ => false,
        };

        if let Err(e) = claim(&mut handle, &endpoints) {
            if detached_kernel_driver {
                reattach_kernel_driver(&mut handle, endpoints.interface);
            }
            return Err(e.into());
        }

        debug!(
            "claimed interface {} (bulk in {:#04x}, out {:#04x})",
            endpoints.interface, endpoints.bulk_in, endpoints.bulk_out
        );
        self.opened = Some(Opened {
            handle,
            endpoints,
            detached_kernel_driver,
        });
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> TransportResult<()> {
        let opened = self.opened()?;
        let written = opened
            .handle
            .write_bulk(opened.endpoints.bulk_out, data, WRITE_TIMEOUT)
            .map_err(map_usb_error)?;
        if written != data.len() {
            return Err(TransportError::Io(format!(
                "short write: {} of {} bytes",
                written,
                data.len()
            )));
        }
        Ok(())
    }

    fn read(&mut self, capacity: usize, timeout: Duration) -> TransportResult<Vec<u8>> {
        let opened = self.opened()?;
        let mut buf = vec![0u8; capacity];
        let n = opened
            .handle
            .read_bulk(opened.endpoints.bulk_in, &mut buf, timeout)
            .map_err(map_usb_error)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) -> TransportResult<()> {
        let Some(mut opened) = self.opened.take() else {
            return Ok(());
        };
        let interface = opened.endpoints.interface;
        let released = opened.handle.release_interface(interface);
        if opened.detached_kernel_driver {
            reattach_kernel_driver(&mut opened.handle, interface);
        }
        released.map_err(map_usb_error)
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("closing usb transport failed: {}", e);
        }
    }
}
