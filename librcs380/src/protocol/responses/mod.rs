// librcs380/src/protocol/responses/mod.rs

pub mod version;

pub use version::decode_version;
