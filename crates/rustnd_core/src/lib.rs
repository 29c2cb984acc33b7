//! Core types for the RustND engine
//!
//! This crate turns a loaded N-dimensional figure under user control:
//!
//! - [`Figure`] - Polygons of D-dimensional vertices, loaded from JSON
//! - [`AngleState`] - Accumulated angle per rotation plane
//! - [`ControlInputs`] - Per-frame snapshot of plane, direction, step and velocity
//! - [`TransformApplier`] - In-place incremental rotation of a figure
//! - [`RotationEngine`] - Owns all of the above and advances it each tick
//! - [`Projection`] - Reduces vertices to 3D for a renderer
//! - [`Diagnostics`] - Angle readout per plane

mod figure_error;
mod figure;
pub mod shapes;
mod angles;
mod controls;
mod transform;
mod projection;
mod engine;
mod diagnostics;

pub use figure_error::FigureError;
pub use figure::{Figure, FigureFile, Polygon, MIN_DIMENSION, MAX_DIMENSION};
pub use angles::AngleState;
pub use controls::{ControlInputs, Direction, StepMultiplier, RotationState};
pub use transform::TransformApplier;
pub use projection::{Projection, ProjectedVertex};
pub use engine::{RotationEngine, TickReport, FrameChanges, DEFAULT_ANGULAR_SPEED};
pub use diagnostics::{Diagnostics, PlaneReading};

// Re-export the math types callers need alongside the engine
pub use rustnd_math::{VecN, MatN, RotationPlane, enumerate_planes, plane_count, normalize_angle};
