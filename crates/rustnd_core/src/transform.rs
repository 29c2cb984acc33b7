//! Incremental rotation of figure geometry

use rustnd_math::{plane_rotation, RotationPlane};
use crate::Figure;

/// Applies one frame's rotation to every vertex of a figure
///
/// Holds the scratch row buffer so the per-frame pass does no allocation beyond
/// the D×D matrix itself.
#[derive(Debug, Default)]
pub struct TransformApplier {
    scratch: Vec<f64>,
}

impl TransformApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate every vertex by `delta` radians in `plane`: `v = M(delta) * v`
    ///
    /// The matrix is built from this frame's delta only and composed onto the
    /// already-rotated geometry, so rounding error per call is bounded by the
    /// size of one step. Vertices are updated in place in a single pass.
    /// Returns the number of vertices transformed.
    pub fn apply(&mut self, figure: &mut Figure, plane: RotationPlane, delta: f64) -> usize {
        let matrix = plane_rotation(delta, plane, figure.dimension());
        let mut count = 0;
        for vertex in figure.vertices_mut() {
            matrix.transform_in_place(vertex.as_mut_slice(), &mut self.scratch);
            count += 1;
        }
        count
    }
}
