// librcs380/src/card/mod.rs

use crate::types::{Idm, Pmm, SystemCode};

pub mod classify;
pub mod config;
pub mod poller;

pub use classify::{PollOutcome, classify};
pub use config::PollConfig;
pub use poller::{CancelToken, PollState, Poller};

/// A Type F card found by polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    idm: Idm,
    pmm: Pmm,
    system_code: Option<SystemCode>,
}

impl Card {
    pub fn new(idm: Idm, pmm: Pmm, system_code: Option<SystemCode>) -> Self {
        Self {
            idm,
            pmm,
            system_code,
        }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }
    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }
    /// Only present when polling asked for it (request code 0x01).
    pub fn system_code(&self) -> Option<SystemCode> {
        self.system_code
    }
}
