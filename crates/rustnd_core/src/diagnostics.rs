//! Human-readable angle readout

use std::fmt;

use rustnd_math::RotationPlane;
use crate::RotationState;

/// Angle of one plane at the time of the snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneReading {
    pub plane: RotationPlane,
    /// Accumulated angle in degrees, `[0, 360)`
    pub degrees: f64,
    /// True for the plane currently receiving input
    pub active: bool,
}

/// Angle table for every plane
///
/// `Display` renders one line per plane with the active plane bracketed:
///
/// ```text
///  [Angle (X1, X2)]:  90.0
///   Angle (X3, X1) :   0.0
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostics {
    pub readings: Vec<PlaneReading>,
    pub state: RotationState,
}

impl Diagnostics {
    /// The reading for the active plane, if any planes exist
    pub fn active(&self) -> Option<&PlaneReading> {
        self.readings.iter().find(|r| r.active)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reading in &self.readings {
            let label = if reading.active {
                format!("[Angle {}]", reading.plane)
            } else {
                format!(" Angle {} ", reading.plane)
            };
            writeln!(f, "{:>23}:{:6.1}", label, reading.degrees)?;
        }
        Ok(())
    }
}
