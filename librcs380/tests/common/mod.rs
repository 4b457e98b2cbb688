// Shared helpers for the integration test crates in `tests/`.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
