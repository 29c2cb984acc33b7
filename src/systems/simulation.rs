//! Rotation simulation system
//!
//! Drives the engine once per frame:
//! - Delta time calculation (wall clock or fixed step)
//! - Control snapshot from the shared input state
//! - Engine tick

use std::time::Instant;
use rustnd_core::{RotationEngine, TickReport};
use rustnd_input::SharedControls;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether the vertices moved and need re-projecting
    pub geometry_dirty: bool,
    /// Frame time actually fed to the engine, after capping
    pub dt: f64,
    pub report: TickReport,
}

/// Manages the rotation loop
pub struct SimulationSystem {
    last_frame: Instant,
    max_frame_time: f64,
}

impl SimulationSystem {
    /// Create a new simulation system
    ///
    /// Frame times longer than `max_frame_time` seconds are capped so a stall
    /// does not produce one huge rotation step.
    pub fn new(max_frame_time: f64) -> Self {
        Self {
            last_frame: Instant::now(),
            max_frame_time,
        }
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(
        &mut self,
        engine: &mut RotationEngine,
        controls: &SharedControls,
    ) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.step(engine, controls, raw_dt)
    }

    /// Run one frame with an explicit frame time
    pub fn step(
        &mut self,
        engine: &mut RotationEngine,
        controls: &SharedControls,
        raw_dt: f64,
    ) -> SimulationResult {
        let dt = raw_dt.min(self.max_frame_time);

        // One snapshot per tick
        let snapshot = controls.snapshot();
        let report = engine.tick(&snapshot, dt);

        SimulationResult {
            geometry_dirty: report.changes.contains(rustnd_core::FrameChanges::GEOMETRY),
            dt,
            report,
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(0.25)
    }
}
