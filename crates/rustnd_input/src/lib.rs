//! Keyboard input for the RustND engine
//!
//! This crate turns key events into the [`ControlInputs`](rustnd_core::ControlInputs)
//! snapshot the engine reads once per tick.

mod rotation_controller;
mod shared;

pub use rotation_controller::{Modifiers, RotationController};
pub use shared::SharedControls;
