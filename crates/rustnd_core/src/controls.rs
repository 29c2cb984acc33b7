//! Per-frame control snapshot
//!
//! The engine never reads input devices. Whatever handles input builds a
//! [`ControlInputs`] value and hands a copy to
//! [`RotationEngine::tick`](crate::RotationEngine::tick) once per frame, so all
//! fields of one tick come from the same moment.

use serde::{Serialize, Deserialize};

/// Rotation direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Positive angles (+1)
    #[default]
    Forward,
    /// Negative angles (-1)
    Reverse,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Speed multiplier applied on top of the angular speed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMultiplier {
    #[default]
    Single,
    Double,
}

impl StepMultiplier {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            StepMultiplier::Single => 1.0,
            StepMultiplier::Double => 2.0,
        }
    }
}

/// Whether the active plane is currently turning
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationState {
    /// Velocity off: angles hold still
    #[default]
    Idle,
    /// Velocity on: the active plane's angle advances every tick
    Rotating,
}

impl RotationState {
    #[inline]
    pub fn from_velocity(velocity: bool) -> Self {
        if velocity {
            RotationState::Rotating
        } else {
            RotationState::Idle
        }
    }
}

/// Immutable snapshot of the user's controls for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Index into the plane list; wrapped modulo the plane count when read
    pub active_plane: usize,
    pub direction: Direction,
    pub step: StepMultiplier,
    /// On/off angular velocity
    pub velocity: bool,
}

impl ControlInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_plane(mut self, active_plane: usize) -> Self {
        self.active_plane = active_plane;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_step(mut self, step: StepMultiplier) -> Self {
        self.step = step;
        self
    }

    pub fn with_velocity(mut self, velocity: bool) -> Self {
        self.velocity = velocity;
        self
    }

    /// Combined sign and multiplier: `direction * step`
    #[inline]
    pub fn rate_factor(&self) -> f64 {
        self.direction.sign() * self.step.factor()
    }

    #[inline]
    pub fn state(&self) -> RotationState {
        RotationState::from_velocity(self.velocity)
    }

    /// Step the active plane forward by one, wrapping at `plane_count`
    pub fn next_plane(&mut self, plane_count: usize) {
        if plane_count > 0 {
            self.active_plane = (self.active_plane % plane_count + 1) % plane_count;
        }
    }

    /// Step the active plane back by one, wrapping at `plane_count`
    pub fn previous_plane(&mut self, plane_count: usize) {
        if plane_count > 0 {
            self.active_plane = (self.active_plane % plane_count + plane_count - 1) % plane_count;
        }
    }
}
