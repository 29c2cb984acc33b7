//! Figure loading errors
//!
//! Every variant is recoverable: a failed load leaves the previously loaded
//! figure exactly as it was.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error loading a figure file
#[derive(Debug)]
pub enum FigureError {
    /// The figure file does not exist
    NotFound(PathBuf),
    /// Any other IO error (permission denied, is a directory, ...)
    Io(io::Error),
    /// Malformed JSON or a document not matching the figure schema
    Parse(serde_json::Error),
    /// Declared dimension is below 3
    DimensionTooLow(i64),
    /// Declared dimension is larger than the engine supports
    DimensionTooHigh {
        dimension: i64,
        /// Largest dimension accepted where the error was raised
        max: usize,
    },
    /// Declared dimension differs from the figure already loaded
    DimensionMismatch {
        /// Dimension of the loaded figure
        expected: usize,
        /// Dimension declared by the new file
        found: i64,
    },
    /// A vertex has the wrong number of coordinates
    VertexLength {
        /// Index of the polygon containing the vertex
        polygon: usize,
        /// Index of the vertex within its polygon
        vertex: usize,
        /// Figure dimension
        expected: usize,
        /// Number of coordinates the vertex actually has
        found: usize,
    },
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureError::NotFound(path) => {
                write!(f, "Figure file not found: \"{}\"", path.display())
            }
            FigureError::Io(e) => write!(f, "IO error: {}", e),
            FigureError::Parse(e) => write!(f, "Parse error: {}", e),
            FigureError::DimensionTooLow(d) => {
                write!(f, "The dimension ({}) must be 3 or greater", d)
            }
            FigureError::DimensionTooHigh { dimension, max } => {
                write!(
                    f,
                    "The dimension ({}) exceeds the supported maximum of {}",
                    dimension, max
                )
            }
            FigureError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "New dimension ({}) doesn't equal the loaded figure's dimension ({})",
                    found, expected
                )
            }
            FigureError::VertexLength { polygon, vertex, expected, found } => {
                write!(
                    f,
                    "Vertex {} of polygon {} has {} coordinates, expected {}",
                    vertex, polygon, found, expected
                )
            }
        }
    }
}

impl std::error::Error for FigureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FigureError::Io(e) => Some(e),
            FigureError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FigureError {
    fn from(e: io::Error) -> Self {
        FigureError::Io(e)
    }
}

impl From<serde_json::Error> for FigureError {
    fn from(e: serde_json::Error) -> Self {
        FigureError::Parse(e)
    }
}
