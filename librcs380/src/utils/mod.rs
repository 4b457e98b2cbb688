// librcs380/src/utils/mod.rs

//! Small helpers shared across the crate.

pub mod hex;

pub use hex::*;
