//! Closed axis-aligned bounding boxes.

use crate::{Point, QuadTreeError};
use std::fmt;

/// Immutable axis-aligned rectangle.
///
/// All predicates treat the box as closed: points and boxes touching an edge
/// count as inside. Zero width or height is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl BoundingBox {
    /// Create a box from its extent on each axis.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, QuadTreeError> {
        check_axis('x', x_min, x_max)?;
        check_axis('y', y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// Create a box from its center and size.
    pub fn from_center(center: Point, width: f64, height: f64) -> Result<Self, QuadTreeError> {
        if !(width >= 0.0 && height >= 0.0) {
            return Err(QuadTreeError::NegativeSize { width, height });
        }

        Self::new(
            center.x - width / 2.0,
            center.x + width / 2.0,
            center.y - height / 2.0,
            center.y + height / 2.0,
        )
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Get the center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.x_min, self.x_max),
            midpoint(self.y_min, self.y_max),
        )
    }

    /// Check if the point lies inside the box or on its edge.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    /// Check if `other` lies entirely within this box. Shared edges count.
    #[inline]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// Check if the two boxes overlap, touching edges included.
    #[inline]
    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        self.y_max >= other.y_min
            && other.y_max >= self.y_min
            && self.x_max >= other.x_min
            && other.x_max >= self.x_min
    }

    /// Split into `[top_left, top_right, bottom_left, bottom_right]`.
    ///
    /// Neighbouring quadrants share the exact same edge value, so together
    /// they tile this box with no gaps.
    pub(crate) fn quadrants(&self) -> [BoundingBox; 4] {
        let c = self.center();
        let quad = |x_min, x_max, y_min, y_max| BoundingBox { x_min, x_max, y_min, y_max };

        [
            quad(self.x_min, c.x, c.y, self.y_max),
            quad(c.x, self.x_max, c.y, self.y_max),
            quad(self.x_min, c.x, self.y_min, c.y),
            quad(c.x, self.x_max, self.y_min, c.y),
        ]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

fn check_axis(axis: char, min: f64, max: f64) -> Result<(), QuadTreeError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(QuadTreeError::NonFinite { axis, min, max });
    }
    if max < min {
        return Err(QuadTreeError::InvalidBounds { axis, min, max });
    }
    Ok(())
}

/// Halving each bound first keeps the result finite when `max - min` overflows.
#[inline]
fn midpoint(min: f64, max: f64) -> f64 {
    (min / 2.0 + max / 2.0).clamp(min, max)
}
