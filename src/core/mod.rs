//! Core functionality: vector math and low-level helpers.

#[macro_use]
pub mod utils;
pub mod math;
