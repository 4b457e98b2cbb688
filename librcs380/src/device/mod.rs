// librcs380/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod engine;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use handle::{ChipsetInfo, Device, Initialized, Uninitialized};
