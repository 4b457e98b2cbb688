// librcs380/src/device/handle.rs

use log::debug;

use crate::device::config::EngineConfig;
use crate::device::engine::Engine;
use crate::protocol::commands::{self, Command, rf};
use crate::protocol::responses::decode_version;
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::Result;

/// Type-state markers. `Initialized` carries what initialization learned.
pub struct Uninitialized;
pub struct Initialized {
    info: ChipsetInfo,
}

/// Versions reported by the chipset during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipsetInfo {
    pub firmware: FirmwareVersion,
    pub pd_data: FirmwareVersion,
}

/// Device handle that enforces initialization state at compile time.
pub struct Device<State = Uninitialized> {
    engine: Engine,
    state: State,
}

impl Device<Uninitialized> {
    /// Open the transport with the default engine configuration.
    pub fn open(transport: Box<dyn Transport>) -> Result<Self> {
        Self::open_with_config(transport, EngineConfig::default())
    }

    /// Open the transport and abort whatever command the chipset may still
    /// be processing from a previous session.
    pub fn open_with_config(transport: Box<dyn Transport>, config: EngineConfig) -> Result<Self> {
        let mut engine = Engine::open(transport, config)?;
        engine.abort()?;
        Ok(Self {
            engine,
            state: Uninitialized,
        })
    }

    /// Bring the chipset into Type F polling mode. Returns an initialized
    /// Device on success; on failure the device is dropped and the
    /// transport closed.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.send(&commands::set_command_type())?;

        let firmware = decode_version(&self.send(&commands::get_firmware_version())?)?;
        let pd_data = decode_version(&self.send(&commands::get_pd_data_version())?)?;
        debug!("firmware {}, pd data {}", firmware, pd_data);

        self.send(&commands::switch_rf(false))?;
        self.send(&rf::in_set_rf(rf::IN_SET_RF_TYPE_F_212))?;
        self.send(&rf::in_set_protocol_defaults())?;
        self.send(&rf::in_set_protocol(&rf::IN_SET_PROTOCOL_TYPE_F))?;

        Ok(Device {
            engine: self.engine,
            state: Initialized {
                info: ChipsetInfo { firmware, pd_data },
            },
        })
    }
}

impl<State> Device<State> {
    /// Run one command-response exchange.
    pub fn send(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.engine.send(cmd)
    }

    /// Ask the chipset to drop the command in progress.
    pub fn abort(&mut self) -> Result<()> {
        self.engine.abort()
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// Close the transport. Dropping the device does the same but cannot
    /// report errors.
    pub fn close(mut self) -> Result<()> {
        self.engine.close()
    }
}

impl Device<Initialized> {
    pub fn chipset_info(&self) -> ChipsetInfo {
        self.state.info
    }
}
