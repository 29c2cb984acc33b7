//! Square matrices for N-dimensional transformations
//!
//! [`MatN`] is a dense D×D matrix stored row-major. It applies to column vectors:
//! `v' = M * v`. The main producer is [`plane_rotation`], which builds the
//! rotation for one directed plane.

use crate::{RotationPlane, VecN};

/// Dense square matrix (row-major)
#[derive(Clone, Debug, PartialEq)]
pub struct MatN {
    dim: usize,
    data: Vec<f64>,
}

impl MatN {
    /// Identity matrix of the given dimension
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = 1.0;
        }
        m
    }

    /// All-zero matrix of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Build a matrix from rows
    ///
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let dim = rows.len();
        if rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        Some(Self {
            dim,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    /// Set the entry at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let n = self.dim;
        let mut t = Self::zeros(n);
        for r in 0..n {
            for c in 0..n {
                t.data[c * n + r] = self.data[r * n + c];
            }
        }
        t
    }

    /// Matrix product `self * other` (applies `other` first, then `self`)
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.dim, other.dim, "matrix dimension mismatch");
        let n = self.dim;
        let mut result = Self::zeros(n);
        for r in 0..n {
            for k in 0..n {
                let lhs = self.data[r * n + k];
                if lhs == 0.0 {
                    continue;
                }
                for c in 0..n {
                    result.data[r * n + c] += lhs * other.data[k * n + c];
                }
            }
        }
        result
    }

    /// Transform a vector: `M * v`
    ///
    /// See [`transform_in_place`](Self::transform_in_place) for how mismatched
    /// dimensions are handled.
    pub fn transform(&self, v: &VecN) -> VecN {
        let mut out = v.clone();
        let mut scratch = Vec::with_capacity(self.dim);
        self.transform_in_place(out.as_mut_slice(), &mut scratch);
        out
    }

    /// Transform a coordinate slice in place: `coords = M * coords`
    ///
    /// `scratch` is reused between calls so per-vertex transforms don't allocate.
    /// Only the leading `min(dim, coords.len())` coordinates take part; anything
    /// past the matrix dimension is left as is, which makes the 1×1 identity
    /// returned for degenerate rotations a no-op on any vertex.
    pub fn transform_in_place(&self, coords: &mut [f64], scratch: &mut Vec<f64>) {
        let n = self.dim;
        let k = n.min(coords.len());
        scratch.clear();
        for r in 0..k {
            let row = &self.data[r * n..r * n + k];
            scratch.push(row.iter().zip(coords[..k].iter()).map(|(m, c)| m * c).sum());
        }
        coords[..k].copy_from_slice(scratch);
    }

    /// Determinant by LU decomposition with partial pivoting
    pub fn determinant(&self) -> f64 {
        let n = self.dim;
        if n == 0 {
            return 1.0;
        }
        let mut a = self.data.clone();
        let mut det = 1.0;

        for col in 0..n {
            // Pick the largest pivot in this column
            let mut pivot = col;
            for row in (col + 1)..n {
                if a[row * n + col].abs() > a[pivot * n + col].abs() {
                    pivot = row;
                }
            }
            if a[pivot * n + col] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                for c in 0..n {
                    a.swap(col * n + c, pivot * n + c);
                }
                det = -det;
            }

            let p = a[col * n + col];
            det *= p;
            for row in (col + 1)..n {
                let factor = a[row * n + col] / p;
                for c in col..n {
                    a[row * n + c] -= factor * a[col * n + c];
                }
            }
        }
        det
    }

    /// True if `M * Mᵀ` equals the identity within `epsilon`
    pub fn is_orthogonal(&self, epsilon: f64) -> bool {
        let product = self.mul(&self.transpose());
        let identity = Self::identity(self.dim);
        product.approx_eq(&identity, epsilon)
    }

    /// True if both matrices have the same dimension and all entries are within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// Create a rotation matrix in one plane of `dim`-dimensional space.
///
/// The result is the identity except for the four entries of the plane `(a, b)`:
///
/// ```text
/// M[a][a] = cos θ      M[a][b] =  s·sin θ
/// M[b][a] = -s·sin θ   M[b][b] =  cos θ
/// ```
///
/// where `s = -1` if `a < b` and `s = +1` otherwise. Whatever the pair order,
/// `-sin θ` lands above the diagonal, so a positive angle always turns the lower
/// axis toward the higher one.
///
/// Invalid input (an axis outside `[0, dim)`, `a == b`, or `dim < 2`) never
/// panics; it yields the 1×1 identity, meaning "no rotation applicable".
///
/// # Example
/// ```
/// use rustnd_math::{plane_rotation, RotationPlane, VecN};
/// let m = plane_rotation(std::f64::consts::FRAC_PI_2, RotationPlane::new(0, 1), 3);
/// let v = m.transform(&VecN::new(vec![1.0, 0.0, 0.0]));
/// assert!((v[1] - 1.0).abs() < 1e-12);
/// ```
pub fn plane_rotation(angle: f64, plane: RotationPlane, dim: usize) -> MatN {
    if dim < 2 || !plane.is_valid_for(dim) {
        return MatN::identity(1);
    }

    let (sn, cs) = angle.sin_cos();
    let s = if plane.a < plane.b { -1.0 } else { 1.0 };

    let mut m = MatN::identity(dim);
    m.set(plane.a, plane.a, cs);
    m.set(plane.b, plane.b, cs);
    m.set(plane.a, plane.b, s * sn);
    m.set(plane.b, plane.a, -s * sn);
    m
}
