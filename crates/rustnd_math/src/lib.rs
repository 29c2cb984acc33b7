//! N-dimensional Mathematics Library
//!
//! This crate provides the dense vector, matrix and rotation-plane types used by
//! the RustND engine. Unlike a fixed 3D or 4D library, every type here carries its
//! dimension at runtime.
//!
//! ## Core Types
//!
//! - [`VecN`] - D-dimensional vector of `f64` coordinates
//! - [`MatN`] - D×D square matrix (row-major)
//! - [`RotationPlane`] - Directed pair of axes spanning a rotation plane
//!
//! ## Functions
//!
//! - [`enumerate_planes`] - Canonical ordered list of all planes for a dimension
//! - [`plane_rotation`] - Rotation matrix for one plane
//! - [`normalize_angle`] - Wrap an angle into `[0, 2π)`

mod vecn;
pub mod matn;
pub mod plane;
pub mod angle;

pub use vecn::VecN;
pub use matn::{MatN, plane_rotation};
pub use plane::{RotationPlane, enumerate_planes, plane_count};
pub use angle::{normalize_angle, FULL_TURN};
