use std::time::Duration;

use librcs380::card::{CancelToken, PollConfig, PollState, Poller};
use librcs380::{Error, SystemCode};

use crate::common;

fn fast() -> PollConfig {
    PollConfig::default().interval(Duration::ZERO)
}

#[test]
fn initialized_mock_polling_returns_card() {
    let (mock, mut dev) = common::initialized_device().unwrap();
    common::seed_no_card(&mock);
    common::seed_card(
        &mock,
        common::sample_idm(),
        common::sample_pmm(),
        Some(common::sample_system_code()),
    );

    let card = Poller::new(fast()).run(&mut dev).unwrap();
    assert_eq!(card.idm(), &common::sample_idm());
    assert_eq!(card.pmm(), &common::sample_pmm());
    assert_eq!(card.idm().to_hex(), "012e4cd1820a5f33");
}

#[test]
fn custom_system_code_goes_on_the_air() {
    let (mock, mut dev) = common::initialized_device().unwrap();
    common::seed_card(&mock, common::sample_idm(), common::sample_pmm(), None);

    let config = fast().system_code(SystemCode::new(0x12fc)).request_code(0);
    Poller::new(config).run(&mut dev).unwrap();

    let last = mock.writes().last().cloned().unwrap();
    assert_eq!(&last[9..15], &[0x06, 0x00, 0x12, 0xfc, 0x00, 0x00]);
}

#[test]
fn dead_link_fails_instead_of_spinning() {
    let (_mock, mut dev) = common::initialized_device().unwrap();
    let mut poller = Poller::new(fast());
    match poller.run(&mut dev) {
        Err(Error::PollingFailed { attempts, .. }) => assert_eq!(attempts, 8),
        other => panic!("expected PollingFailed, got {:?}", other),
    }
    assert_eq!(poller.state(), PollState::Failed);
}

#[test]
fn cancel_token_stops_polling() {
    let (mock, mut dev) = common::initialized_device().unwrap();
    common::seed_no_card(&mock);

    let token = CancelToken::new();
    let mut poller = Poller::new(fast()).with_cancel(token.clone());
    token.cancel();
    assert!(matches!(poller.run(&mut dev), Err(Error::Cancelled)));
    assert_eq!(mock.pending_reads(), 2);
}
