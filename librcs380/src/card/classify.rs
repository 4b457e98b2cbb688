// librcs380/src/card/classify.rs

use crate::card::Card;
use crate::protocol::parser::{be_u16_at, idm_at, pmm_at};
use crate::types::SystemCode;

/// Leading bytes of the InCommRF result when nothing answered in time
pub const NO_CARD_PREFIX: [u8; 4] = [0x80, 0x00, 0x00, 0x00];

/// Offsets into the InCommRF result data. Four status bytes and one reserved
/// byte precede the frame the card sent back.
pub const LEN_OFFSET: usize = 5;
pub const RESPONSE_CODE_OFFSET: usize = 6;
pub const IDM_OFFSET: usize = 7;
pub const PMM_OFFSET: usize = 15;
pub const SYSTEM_CODE_OFFSET: usize = 23;

/// Length marker of a polling response carrying a system code
pub const POLL_LEN_WITH_SYSTEM_CODE: u8 = 0x14;
/// Length marker of a polling response without one (request code 0x00)
pub const POLL_LEN_PLAIN: u8 = 0x12;
/// FeliCa Polling response code
pub const POLL_RESPONSE_CODE: u8 = 0x01;

/// Result of one polling exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    NoCard,
    /// Something answered but not as a Type F card
    Other,
    Felica(Card),
}

/// Classify InCommRF result data. Never fails; short or unknown data is
/// `Other`.
pub fn classify(data: &[u8]) -> PollOutcome {
    if data.starts_with(&NO_CARD_PREFIX) {
        return PollOutcome::NoCard;
    }

    let (len, code) = match (data.get(LEN_OFFSET), data.get(RESPONSE_CODE_OFFSET)) {
        (Some(&len), Some(&code)) => (len, code),
        _ => return PollOutcome::Other,
    };
    if code != POLL_RESPONSE_CODE || !matches!(len, POLL_LEN_WITH_SYSTEM_CODE | POLL_LEN_PLAIN) {
        return PollOutcome::Other;
    }

    let (Ok(idm), Ok(pmm)) = (idm_at(data, IDM_OFFSET), pmm_at(data, PMM_OFFSET)) else {
        return PollOutcome::Other;
    };
    let system_code = if len == POLL_LEN_WITH_SYSTEM_CODE {
        be_u16_at(data, SYSTEM_CODE_OFFSET).ok().map(SystemCode::new)
    } else {
        None
    };

    PollOutcome::Felica(Card::new(idm, pmm, system_code))
}
