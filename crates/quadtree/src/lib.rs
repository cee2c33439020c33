//! Point-region quadtree.
//!
//! This crate contains:
//! - `BoundingBox`, a closed axis-aligned rectangle with containment and
//!   intersection predicates
//! - `QuadTree`, a capacity-bounded spatial index over 2D points
//! - Construction errors shared by both

mod bbox;
mod error;
mod tree;

pub use bbox::BoundingBox;
pub use error::QuadTreeError;
pub use tree::{QuadTree, Quadrants};

/// A 2D point with `f64` coordinates.
///
/// Equality is exact coordinate equality.
pub type Point = glam::DVec2;
