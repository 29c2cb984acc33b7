//! Projection from D dimensions down to 3D for rendering
//!
//! The engine keeps full D-dimensional vertices. A renderer that can only draw
//! three dimensions picks a [`Projection`] and gets [`ProjectedVertex`] values it
//! can upload to a vertex buffer as-is.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use rustnd_math::VecN;
use crate::Figure;

/// Smallest allowed `distance - coordinate` in a perspective divide
const MIN_DEPTH: f64 = 1e-3;

/// How D-dimensional vertices are reduced to 3D
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Projection {
    /// Keep the first three coordinates, drop the rest
    #[default]
    Orthographic,
    /// Perspective divide along each extra axis, highest first
    ///
    /// For axis `k ≥ 3` the lower coordinates are scaled by
    /// `distance / (distance - x_k)`, like a pinhole camera placed `distance`
    /// units along that axis.
    Perspective { distance: f64 },
}

/// A vertex ready for a 3D renderer
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedVertex {
    pub position: [f32; 3],
}

impl Projection {
    /// Project one vertex
    ///
    /// Vertices with fewer than three coordinates are padded with zeros.
    pub fn project(&self, vertex: &VecN) -> ProjectedVertex {
        match *self {
            Projection::Orthographic => first_three(vertex),
            Projection::Perspective { distance } => {
                // Project away one axis at a time, highest first
                let mut work = vertex.clone();
                for k in (3..work.dim()).rev() {
                    let depth = (distance - work[k]).max(MIN_DEPTH);
                    let scale = distance / depth;
                    for c in work.as_mut_slice()[..k].iter_mut() {
                        *c *= scale;
                    }
                }
                first_three(&work)
            }
        }
    }

    /// Project every polygon of a figure, keeping polygon and vertex order
    pub fn project_figure(&self, figure: &Figure) -> Vec<Vec<ProjectedVertex>> {
        figure
            .polygons()
            .iter()
            .map(|polygon| {
                polygon
                    .vertices()
                    .iter()
                    .map(|v| self.project(v))
                    .collect()
            })
            .collect()
    }
}

fn first_three(v: &VecN) -> ProjectedVertex {
    ProjectedVertex {
        position: [0, 1, 2].map(|axis| v.get_or_zero(axis) as f32),
    }
}
