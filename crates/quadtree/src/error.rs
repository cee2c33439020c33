//! Construction error types.

use thiserror::Error;

/// Errors that can occur while constructing a bounding box or a tree.
///
/// Rejecting a point on insertion is not an error; `QuadTree::insert`
/// reports it through its return value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadTreeError {
    #[error("Invalid {axis} bounds: min {min} is not <= max {max}")]
    InvalidBounds { axis: char, min: f64, max: f64 },

    #[error("Non-finite {axis} bounds: [{min}, {max}]")]
    NonFinite { axis: char, min: f64, max: f64 },

    #[error("Negative box size: {width}x{height}")]
    NegativeSize { width: f64, height: f64 },

    #[error("Capacity must be at least 1")]
    InvalidCapacity,
}
