//! RustND - N-dimensional rotation engine
//!
//! Application layer: configuration and the simulation driver.

pub mod config;
pub mod systems;
