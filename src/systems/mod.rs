//! Per-step systems operating on the world's body collection.

pub mod collision;
pub mod forces;
pub mod integrate;
