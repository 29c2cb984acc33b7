//! Rotation controller
//!
//! Controls:
//! - `]`: Next rotation plane
//! - `[`: Previous rotation plane
//! - Space: Rotate while held
//! - Ctrl (held on key press): Reverse direction
//! - Shift (held on key press): Double step

use bitflags::bitflags;
use rustnd_core::{ControlInputs, Direction, StepMultiplier};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const CONTROL = 1 << 0;
        const SHIFT = 1 << 1;
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::CONTROL, state.control_key());
        mods.set(Modifiers::SHIFT, state.shift_key());
        mods
    }
}

/// Keyboard state for the rotation session
///
/// Holds the current [`ControlInputs`] and updates it from key events. The
/// plane count must be kept in sync with the loaded figure so plane stepping
/// wraps correctly.
#[derive(Debug, Default)]
pub struct RotationController {
    controls: ControlInputs,
    plane_count: usize,
}

impl RotationController {
    pub fn new(plane_count: usize) -> Self {
        Self {
            controls: ControlInputs::default(),
            plane_count,
        }
    }

    /// Start from an existing control state
    pub fn with_controls(mut self, controls: ControlInputs) -> Self {
        self.controls = controls;
        self
    }

    /// Update the number of planes after a figure load; resets to plane 0
    pub fn set_plane_count(&mut self, plane_count: usize) {
        self.plane_count = plane_count;
        self.controls.active_plane = 0;
    }

    #[inline]
    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    /// Current snapshot to hand to the engine
    #[inline]
    pub fn controls(&self) -> ControlInputs {
        self.controls
    }

    /// Process keyboard input
    ///
    /// Any key press records direction and step from the held modifiers, the
    /// same way a press of `]`, `[` or Space does. Returns true if the key is
    /// one of the rotation bindings.
    pub fn process_keyboard(
        &mut self,
        key: KeyCode,
        state: ElementState,
        modifiers: Modifiers,
    ) -> bool {
        if state == ElementState::Released {
            if key == KeyCode::Space {
                self.controls.velocity = false;
                return true;
            }
            return false;
        }

        self.controls.direction = if modifiers.contains(Modifiers::CONTROL) {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        self.controls.step = if modifiers.contains(Modifiers::SHIFT) {
            StepMultiplier::Double
        } else {
            StepMultiplier::Single
        };

        match key {
            KeyCode::BracketRight => {
                self.controls.next_plane(self.plane_count);
                log::debug!("Selected plane {}", self.controls.active_plane);
                true
            }
            KeyCode::BracketLeft => {
                self.controls.previous_plane(self.plane_count);
                log::debug!("Selected plane {}", self.controls.active_plane);
                true
            }
            KeyCode::Space => {
                self.controls.velocity = true;
                true
            }
            _ => false,
        }
    }
}
