use std::time::Duration;

use librcs380::constants::ACK_FRAME;
use librcs380::device::{Device, DeviceBuilder, Initialized};
use librcs380::transport::MockTransport;
use librcs380::FirmwareVersion;

use crate::common;

#[test]
fn builder_open_then_initialize() {
    common::init_logger();
    let mock = MockTransport::new();
    common::seed_initialization(&mock);

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .read_timeout(Duration::from_millis(100))
        .open()
        .unwrap();
    let device: Device<Initialized> = device.initialize().unwrap();

    let info = device.chipset_info();
    assert_eq!(info.firmware, FirmwareVersion::new(0x01, 0x11));
    assert_eq!(info.pd_data, FirmwareVersion::new(0x01, 0x00));

    let writes = mock.writes();
    assert_eq!(writes[0], ACK_FRAME.to_vec());
    assert_eq!(writes[1], common::set_command_type_frame());
    assert_eq!(writes.len(), 8);
    assert!(
        mock.read_calls()
            .iter()
            .all(|&(_, timeout)| timeout == Duration::from_millis(100))
    );
}

#[test]
fn close_releases_transport_once() {
    let (mock, device) = common::initialized_device().unwrap();
    device.close().unwrap();
    assert!(!mock.is_open());
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn drop_releases_transport() {
    let (mock, device) = common::initialized_device().unwrap();
    drop(device);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn initialization_rejects_short_version() {
    let mock = MockTransport::new();
    common::seed_exchange(&mock, 0x2a, &[]);
    common::seed_exchange(&mock, 0x20, &[0x11]);

    let device = Device::open(Box::new(mock.clone())).unwrap();
    assert!(matches!(
        device.initialize(),
        Err(librcs380::Error::InvalidLength { expected: 2, actual: 1 })
    ));
}
