use librcs380::device::{Engine, EngineConfig};
use librcs380::protocol::Command;
use librcs380::protocol::commands::switch_rf;
use librcs380::transport::MockTransport;
use librcs380::{Error, ProtocolError, TransportError};

use crate::common;

fn engine(mock: &MockTransport) -> Engine {
    common::init_logger();
    Engine::open(Box::new(mock.clone()), EngineConfig::default()).unwrap()
}

#[test]
fn ack_then_single_byte_response() {
    let mock = MockTransport::new();
    mock.set_pad_reads(true);
    mock.push_read(common::ack());
    mock.push_read(common::single_byte_response());

    let mut e = engine(&mock);
    assert_eq!(e.send(&Command::raw(0xd7, Vec::new())).unwrap(), vec![0x01]);
}

#[test]
fn mismatch_and_timeout_surface() {
    let mock = MockTransport::new();
    let mut e = engine(&mock);

    mock.push_read(common::ack());
    mock.push_read(common::no_card_response());
    assert!(matches!(
        e.send(&switch_rf(true)),
        Err(Error::Protocol(ProtocolError::Mismatch {
            expected: 0x07,
            actual: 0x05
        }))
    ));

    mock.push_read(common::ack());
    assert!(matches!(
        e.send(&switch_rf(true)),
        Err(Error::Protocol(ProtocolError::Timeout))
    ));
}

#[test]
fn transient_errors_allow_retry() {
    let mock = MockTransport::new();
    let mut e = engine(&mock);

    mock.push_read(common::response_frame(0x06, &[]));
    let err = e.send(&switch_rf(true)).unwrap_err();
    assert!(err.is_transient());

    // abort then retry on the same engine
    e.abort().unwrap();
    common::seed_exchange(&mock, 0x06, &[]);
    assert!(e.send(&switch_rf(true)).unwrap().is_empty());
}

#[test]
fn disconnect_is_not_transient() {
    let mock = MockTransport::new();
    let mut e = engine(&mock);
    mock.push_read_error(TransportError::Disconnected);
    let err = e.send(&switch_rf(true)).unwrap_err();
    assert!(matches!(err, Error::TransportRead(TransportError::Disconnected)));
    assert!(!err.is_transient());
}
