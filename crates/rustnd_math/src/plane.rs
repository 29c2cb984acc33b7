//! Rotation planes in N-dimensional space
//!
//! In D dimensions a rotation happens in a plane spanned by two coordinate axes,
//! and there are C(D,2) such planes. Each plane is stored as a *directed* pair of
//! axes following a parity rule. [`plane_rotation`](crate::plane_rotation) picks
//! its sine sign from the pair order, and the two conventions together give every
//! plane the same turning sense: a positive angle carries the lower axis toward
//! the higher one.

use serde::{Serialize, Deserialize};
use std::fmt;

/// A directed pair of axes `(a, b)` spanning a rotation plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationPlane {
    /// First axis of the directed pair
    pub a: usize,
    /// Second axis of the directed pair
    pub b: usize,
}

impl RotationPlane {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Build the directed plane for the undirected axis pair `{i, j}`
    ///
    /// The pair is kept as `(min, max)` when the axis sum is odd and flipped to
    /// `(max, min)` when it is even.
    pub fn directed(i: usize, j: usize) -> Self {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if (lo + hi) % 2 == 1 {
            Self::new(lo, hi)
        } else {
            Self::new(hi, lo)
        }
    }

    /// True if both axes lie in `[0, dim)` and differ
    #[inline]
    pub fn is_valid_for(&self, dim: usize) -> bool {
        self.a != self.b && self.a < dim && self.b < dim
    }

    /// The axes in ascending order, ignoring direction
    #[inline]
    pub fn axes(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// Ordering key equivalent to `2^a + 2^b`
    ///
    /// For distinct axes `lo < hi`, `2^hi` exceeds the sum of every lower power of
    /// two, so comparing `(hi, lo)` lexicographically orders planes exactly like
    /// the power-sum while staying exact for any dimension.
    #[inline]
    pub fn sort_key(&self) -> (usize, usize) {
        let (lo, hi) = self.axes();
        (hi, lo)
    }
}

impl fmt::Display for RotationPlane {
    /// Axes are shown 1-based: plane (0, 1) prints as `(X1, X2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(X{}, X{})", self.a + 1, self.b + 1)
    }
}

/// Number of independent rotation planes in `dim` dimensions: `dim * (dim - 1) / 2`
#[inline]
pub fn plane_count(dim: usize) -> usize {
    dim * dim.saturating_sub(1) / 2
}

/// Enumerate every rotation plane for `dim` dimensions in canonical order
///
/// Each unordered pair `i < j` becomes a directed plane via
/// [`RotationPlane::directed`], and the list is sorted by the `2^i + 2^j` key.
/// The result has exactly [`plane_count`]`(dim)` entries and is the same for
/// every call with the same `dim`; it is the index space for per-plane angle
/// state and for stepping the active plane.
pub fn enumerate_planes(dim: usize) -> Vec<RotationPlane> {
    let mut planes = Vec::with_capacity(plane_count(dim));
    for i in 0..dim {
        for j in (i + 1)..dim {
            planes.push(RotationPlane::directed(i, j));
        }
    }
    planes.sort_by_key(RotationPlane::sort_key);
    planes
}
