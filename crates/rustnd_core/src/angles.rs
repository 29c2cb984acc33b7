//! Accumulated per-plane rotation angles

use rustnd_math::normalize_angle;

/// Total rotation applied in each plane since the figure was loaded
///
/// Index-aligned with the engine's plane list. Every entry stays in `[0, 2π)`:
/// [`advance`](Self::advance) normalizes after each update so long sessions
/// never accumulate unbounded values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleState {
    angles: Vec<f64>,
}

impl AngleState {
    /// Zeroed state for `plane_count` planes
    pub fn new(plane_count: usize) -> Self {
        Self {
            angles: vec![0.0; plane_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Angle of one plane in radians
    #[inline]
    pub fn get(&self, plane_index: usize) -> Option<f64> {
        self.angles.get(plane_index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    /// Add `delta` radians to one plane and wrap the result into `[0, 2π)`
    ///
    /// Only the indexed entry is touched. Returns the new angle, or `None` if
    /// the index is out of range.
    pub fn advance(&mut self, plane_index: usize, delta: f64) -> Option<f64> {
        let angle = self.angles.get_mut(plane_index)?;
        *angle = normalize_angle(*angle + delta);
        Some(*angle)
    }
}
