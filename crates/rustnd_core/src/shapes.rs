//! Built-in figures
//!
//! Generated figures are used when no figure file is available and as test
//! fixtures with known geometry.

use rustnd_math::VecN;
use crate::figure::{Figure, Polygon};
use crate::FigureError;

/// Largest hypercube [`hypercube`] will build (about two million faces)
pub const MAX_HYPERCUBE_DIMENSION: usize = 16;

/// Number of square faces of a `dim`-cube: `C(dim, 2) * 2^(dim - 2)`
pub fn hypercube_face_count(dim: usize) -> usize {
    if dim < 2 {
        return 0;
    }
    rustnd_math::plane_count(dim) << (dim - 2)
}

/// Generate the D-dimensional hypercube as a set of square polygons
///
/// The cube is centered on the origin with side length `size`. Every 2-face is
/// emitted: for each axis pair `i < j` and each ±h assignment of the remaining
/// axes, one square whose corners run `(-,-) (+,-) (+,+) (-,+)` in `(i, j)`.
///
/// Fails with [`FigureError::DimensionTooLow`] below 3 and
/// [`FigureError::DimensionTooHigh`] above [`MAX_HYPERCUBE_DIMENSION`].
pub fn hypercube(dim: usize, size: f64) -> Result<Figure, FigureError> {
    if dim > MAX_HYPERCUBE_DIMENSION {
        return Err(FigureError::DimensionTooHigh {
            dimension: dim as i64,
            max: MAX_HYPERCUBE_DIMENSION,
        });
    }
    let h = size * 0.5;
    let mut polygons = Vec::with_capacity(hypercube_face_count(dim));

    for i in 0..dim {
        for j in (i + 1)..dim {
            let others: Vec<usize> = (0..dim).filter(|&k| k != i && k != j).collect();
            for mask in 0..(1usize << others.len()) {
                let mut base = vec![0.0; dim];
                for (bit, &axis) in others.iter().enumerate() {
                    base[axis] = if (mask >> bit) & 1 == 1 { h } else { -h };
                }
                let corner = |si: f64, sj: f64| {
                    let mut c = base.clone();
                    c[i] = si * h;
                    c[j] = sj * h;
                    VecN::new(c)
                };
                polygons.push(Polygon::new(vec![
                    corner(-1.0, -1.0),
                    corner(1.0, -1.0),
                    corner(1.0, 1.0),
                    corner(-1.0, 1.0),
                ]));
            }
        }
    }

    Figure::new(dim, polygons)
}
