//! Figure store and figure file loading
//!
//! A [`Figure`] is a dimension D plus an ordered list of [`Polygon`]s, each an
//! ordered loop of D-dimensional vertices. Figures are read from JSON:
//!
//! ```json
//! {
//!   "Dimension": 3,
//!   "Polygons": [
//!     [ [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0] ]
//!   ]
//! }
//! ```
//!
//! Loading validates the whole document into a fresh figure before anything is
//! handed back, so a failed load never leaves a half-built figure behind.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use rustnd_math::VecN;
use crate::FigureError;

/// Smallest dimension a figure may have
pub const MIN_DIMENSION: usize = 3;

/// Largest dimension a figure may have
///
/// Plane count grows as D², so this keeps a typo in a file from allocating
/// millions of angle slots.
pub const MAX_DIMENSION: usize = 1024;

fn check_dimension(dimension: i64) -> Result<(), FigureError> {
    if dimension < MIN_DIMENSION as i64 {
        return Err(FigureError::DimensionTooLow(dimension));
    }
    if dimension > MAX_DIMENSION as i64 {
        return Err(FigureError::DimensionTooHigh {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// An ordered loop of vertices
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<VecN>,
}

impl Polygon {
    pub fn new(vertices: Vec<VecN>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[VecN] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// On-disk figure schema
///
/// Field names follow the file format (`Dimension`, `Polygons`). The dimension
/// is read as a signed integer so nonsense like `-1` is reported as too low
/// rather than as a parse error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FigureFile {
    #[serde(rename = "Dimension")]
    pub dimension: i64,
    #[serde(rename = "Polygons")]
    pub polygons: Vec<Vec<Vec<f64>>>,
}

impl From<&Figure> for FigureFile {
    fn from(figure: &Figure) -> Self {
        Self {
            dimension: figure.dimension as i64,
            polygons: figure
                .polygons
                .iter()
                .map(|p| p.vertices.iter().map(|v| v.as_slice().to_vec()).collect())
                .collect(),
        }
    }
}

/// A polyhedral figure in D dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    dimension: usize,
    polygons: Vec<Polygon>,
}

impl Figure {
    /// Create a figure from in-memory polygons
    ///
    /// Applies the same dimension and vertex-length checks as a file load.
    pub fn new(dimension: usize, polygons: Vec<Polygon>) -> Result<Self, FigureError> {
        check_dimension(dimension as i64)?;
        for (pi, polygon) in polygons.iter().enumerate() {
            for (vi, v) in polygon.vertices.iter().enumerate() {
                if v.dim() != dimension {
                    return Err(FigureError::VertexLength {
                        polygon: pi,
                        vertex: vi,
                        expected: dimension,
                        found: v.dim(),
                    });
                }
            }
        }
        Ok(Self { dimension, polygons })
    }

    /// Load a figure from a JSON file
    ///
    /// If `expected_dimension` is set (a figure is already loaded), the file must
    /// declare that same dimension.
    pub fn load<P: AsRef<Path>>(
        path: P,
        expected_dimension: Option<usize>,
    ) -> Result<Self, FigureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FigureError::NotFound(path.to_path_buf()),
            _ => FigureError::Io(e),
        })?;
        Self::from_json_str(&contents, expected_dimension)
    }

    /// Parse and validate a figure from a JSON string
    pub fn from_json_str(
        json: &str,
        expected_dimension: Option<usize>,
    ) -> Result<Self, FigureError> {
        let file: FigureFile = serde_json::from_str(json)?;
        Self::from_file(file, expected_dimension)
    }

    /// Validate a parsed figure document
    ///
    /// Checks run in the order: minimum dimension, maximum dimension, match with
    /// the loaded dimension, then every vertex length.
    pub fn from_file(
        file: FigureFile,
        expected_dimension: Option<usize>,
    ) -> Result<Self, FigureError> {
        check_dimension(file.dimension)?;
        let dimension = file.dimension as usize;

        if let Some(expected) = expected_dimension {
            if expected != dimension {
                return Err(FigureError::DimensionMismatch {
                    expected,
                    found: file.dimension,
                });
            }
        }

        let mut polygons = Vec::with_capacity(file.polygons.len());
        for (pi, raw_polygon) in file.polygons.into_iter().enumerate() {
            let mut vertices = Vec::with_capacity(raw_polygon.len());
            for (vi, coords) in raw_polygon.into_iter().enumerate() {
                if coords.len() != dimension {
                    return Err(FigureError::VertexLength {
                        polygon: pi,
                        vertex: vi,
                        expected: dimension,
                        found: coords.len(),
                    });
                }
                vertices.push(VecN::new(coords));
            }
            polygons.push(Polygon::new(vertices));
        }

        Ok(Self { dimension, polygons })
    }

    /// Dimension D of every vertex
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Mutable access for the transform applier
    ///
    /// Only hands out the vertex storage, never the polygon list, so the
    /// dimension invariant cannot be broken by adding vertices.
    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut VecN> {
        self.polygons.iter_mut().flat_map(|p| p.vertices.iter_mut())
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Total number of vertices over all polygons
    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }

    /// Iterate over every vertex of every polygon in order
    pub fn vertices(&self) -> impl Iterator<Item = &VecN> {
        self.polygons.iter().flat_map(|p| p.vertices.iter())
    }

    /// Per-axis `(min, max)` over all vertices, or `None` for an empty figure
    pub fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        let mut iter = self.vertices();
        let first = iter.next()?;
        let mut bounds: Vec<(f64, f64)> = first.iter().map(|&c| (c, c)).collect();
        for v in iter {
            for (b, &c) in bounds.iter_mut().zip(v.iter()) {
                b.0 = b.0.min(c);
                b.1 = b.1.max(c);
            }
        }
        Some(bounds)
    }

    /// Serialize to the JSON figure format
    pub fn to_json_string(&self) -> Result<String, FigureError> {
        Ok(serde_json::to_string_pretty(&FigureFile::from(self))?)
    }
}
