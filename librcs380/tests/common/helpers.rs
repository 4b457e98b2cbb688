// helpers.rs: mock setup shared by the integration tests

use librcs380::device::{Device, Initialized};
use librcs380::transport::MockTransport;
use librcs380::Result;

pub use librcs380::test_support::{
    ack, felica_poll_data, response_frame, seed_card, seed_exchange, seed_initialization,
    seed_no_card,
};

/// Install env_logger once per test binary; RUST_LOG=trace shows frames.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock transport plus an initialized device that owns a clone of it.
pub fn initialized_device() -> Result<(MockTransport, Device<Initialized>)> {
    init_logger();
    let mock = MockTransport::new();
    let device = librcs380::test_support::initialized_mock_device(&mock)?;
    Ok((mock, device))
}
