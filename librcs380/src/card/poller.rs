// librcs380/src/card/poller.rs

use std::thread;

use log::{debug, info, warn};

use crate::card::Card;
use crate::card::classify::{PollOutcome, classify};
use crate::card::config::PollConfig;
use crate::device::{Device, Initialized};
use crate::protocol::commands::in_comm_rf_polling;
use crate::{Error, Result};

pub use simple_cancelation_token::CancelationToken as CancelToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling,
    Found,
    Failed,
    Cancelled,
}

/// Repeats the Type F polling exchange until a card answers.
///
/// Every iteration checks the cancel token and the iteration cap, sends one
/// InCommRF polling command, and classifies the result. Failed exchanges
/// are counted; `max_consecutive_failures` of them in a row end the loop.
///
/// The cancel token is shared: clones observe the same flag, so one clone
/// can be moved into a signal handler while the poller checks another.
pub struct Poller {
    config: PollConfig,
    cancel: CancelToken,
    state: PollState,
}

impl Poller {
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
            state: PollState::Polling,
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// One polling exchange, no retry and no delay.
    pub fn poll_once(&self, device: &mut Device<Initialized>) -> Result<PollOutcome> {
        let cmd = in_comm_rf_polling(
            self.config.rf_timeout,
            self.config.system_code,
            self.config.request_code,
            self.config.time_slot,
        );
        let data = device.send(&cmd)?;
        Ok(classify(&data))
    }

    /// Poll until a Type F card is found, polling fails, or the token is
    /// cancelled.
    pub fn run(&mut self, device: &mut Device<Initialized>) -> Result<Card> {
        self.state = PollState::Polling;
        let mut iterations: u32 = 0;
        let mut failures: u32 = 0;

        loop {
            if self.cancel.is_canceled() {
                self.state = PollState::Cancelled;
                return Err(Error::Cancelled);
            }
            self.check_iteration_limit(iterations)?;
            iterations += 1;

            match self.poll_once(device) {
                Ok(PollOutcome::Felica(card)) => {
                    info!(
                        "card found: idm {} pmm {}",
                        card.idm().to_hex(),
                        card.pmm().to_hex()
                    );
                    self.state = PollState::Found;
                    return Ok(card);
                }
                Ok(outcome) => {
                    failures = 0;
                    if outcome == PollOutcome::Other {
                        debug!("ignoring non Type F answer");
                    }
                }
                Err(e) => {
                    failures += 1;
                    warn!(
                        "poll failed ({}/{}): {}",
                        failures, self.config.max_consecutive_failures, e
                    );
                    if failures >= self.config.max_consecutive_failures {
                        self.state = PollState::Failed;
                        return Err(Error::PollingFailed {
                            attempts: iterations,
                            reason: e.to_string(),
                        });
                    }
                }
            }

            // the last allowed poll returns without sleeping
            self.check_iteration_limit(iterations)?;
            if !self.config.interval.is_zero() {
                thread::sleep(self.config.interval);
            }
        }
    }

    fn check_iteration_limit(&mut self, iterations: u32) -> Result<()> {
        match self.config.max_iterations {
            Some(max) if iterations >= max => {
                self.state = PollState::Failed;
                Err(Error::PollingFailed {
                    attempts: iterations,
                    reason: "iteration limit".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(PollConfig::default())
    }
}
