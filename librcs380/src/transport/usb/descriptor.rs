// librcs380/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoint pair and the interface that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkEndpoints {
    pub config: u8,
    pub interface: u8,
    pub setting: u8,
    pub bulk_in: u8,
    pub bulk_out: u8,
}

/// Inspect the device descriptors and return the first interface setting
/// exposing both a bulk IN and a bulk OUT endpoint.
pub fn find_bulk_endpoints<C: UsbContext>(device: &Device<C>) -> Option<BulkEndpoints> {
    let dd = device.device_descriptor().ok()?;
    for n in 0..dd.num_configurations() {
        let Ok(config) = device.config_descriptor(n) else {
            continue;
        };
        for interface in config.interfaces() {
            for desc in interface.descriptors() {
                let mut bulk_in = None;
                let mut bulk_out = None;
                for ep in desc.endpoint_descriptors() {
                    if ep.transfer_type() != TransferType::Bulk {
                        continue;
                    }
                    match ep.direction() {
                        Direction::In if bulk_in.is_none() => bulk_in = Some(ep.address()),
                        Direction::Out if bulk_out.is_none() => bulk_out = Some(ep.address()),
                        _ => {}
                    }
                }
                if let (Some(bulk_in), Some(bulk_out)) = (bulk_in, bulk_out) {
                    return Some(BulkEndpoints {
                        config: config.number(),
                        interface: desc.interface_number(),
                        setting: desc.setting_number(),
                        bulk_in,
                        bulk_out,
                    });
                }
            }
        }
    }
    None
}
