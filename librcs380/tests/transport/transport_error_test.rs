use std::time::Duration;

use librcs380::transport::{MockTransport, Transport};
use librcs380::TransportError;

#[test]
fn closed_transport_rejects_io() {
    let mut m = MockTransport::new();
    assert!(matches!(m.write(&[0x00]), Err(TransportError::NotOpen)));
    assert!(matches!(
        m.read(255, Duration::from_millis(1)),
        Err(TransportError::NotOpen)
    ));
}

#[test]
fn empty_script_times_out() {
    let mut m = MockTransport::new();
    m.open().unwrap();
    assert!(matches!(
        m.read(255, Duration::from_millis(1)),
        Err(TransportError::Timeout)
    ));
}

#[test]
fn scripted_failures_and_recovery() {
    let mut m = MockTransport::new();
    m.open().unwrap();
    m.set_write_failures(1);
    assert!(matches!(m.write(&[0x00]), Err(TransportError::Disconnected)));
    m.write(&[0x00]).unwrap();

    m.push_read_error(TransportError::Io("stall".into()));
    m.push_read(vec![0x01]);
    assert!(matches!(
        m.read(255, Duration::from_millis(1)),
        Err(TransportError::Io(_))
    ));
    assert_eq!(m.read(255, Duration::from_millis(1)).unwrap(), vec![0x01]);
}

#[test]
fn failed_open_reports_device_not_found() {
    let mut m = MockTransport::new();
    m.set_fail_open(true);
    assert!(matches!(m.open(), Err(TransportError::DeviceNotFound)));
    assert!(!m.is_open());
}
