//! N-dimensional Vector type

use serde::{Serialize, Deserialize};
use std::ops::{Index, IndexMut};

/// Dense vector with a runtime dimension
///
/// Serializes as a plain array of numbers, which is how vertices appear in
/// figure files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VecN {
    coords: Vec<f64>,
}

impl VecN {
    /// Create a vector from its coordinates
    #[inline]
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Create the zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self { coords: vec![0.0; dim] }
    }

    /// Create the unit vector along `axis`
    ///
    /// Returns the zero vector if `axis` is out of range.
    pub fn basis(dim: usize, axis: usize) -> Self {
        let mut v = Self::zeros(dim);
        if axis < dim {
            v.coords[axis] = 1.0;
        }
        v
    }

    /// Number of coordinates
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.coords
    }

    /// Coordinate at `axis`, or 0.0 past the end
    ///
    /// Lets a 3D projection read x, y, z from vertices of any length.
    #[inline]
    pub fn get_or_zero(&self, axis: usize) -> f64 {
        self.coords.get(axis).copied().unwrap_or(0.0)
    }

    /// Dot product over the shared prefix of both vectors
    pub fn dot(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another vector of the same dimension
    pub fn distance(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// True if both vectors have the same dimension and every coordinate is within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dim() == other.dim()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coords.iter()
    }
}

impl From<Vec<f64>> for VecN {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl From<&[f64]> for VecN {
    fn from(coords: &[f64]) -> Self {
        Self { coords: coords.to_vec() }
    }
}

impl Index<usize> for VecN {
    type Output = f64;
    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.coords[axis]
    }
}

// Operator overloads (component-wise over the shared prefix)

impl std::ops::Add for &VecN {
    type Output = VecN;
    fn add(self, other: &VecN) -> VecN {
        VecN::new(
            self.coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl std::ops::Sub for &VecN {
    type Output = VecN;
    fn sub(self, other: &VecN) -> VecN {
        VecN::new(
            self.coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a - b)
                .collect(),
        )
    }
}

impl std::ops::Mul<f64> for &VecN {
    type Output = VecN;
    fn mul(self, scalar: f64) -> VecN {
        VecN::new(self.coords.iter().map(|c| c * scalar).collect())
    }
}

impl std::ops::MulAssign<f64> for VecN {
    fn mul_assign(&mut self, scalar: f64) {
        for c in &mut self.coords {
            *c *= scalar;
        }
    }
}

impl std::ops::Neg for &VecN {
    type Output = VecN;
    fn neg(self) -> VecN {
        VecN::new(self.coords.iter().map(|c| -c).collect())
    }
}
