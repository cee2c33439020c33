//! Capacity-bounded point-region quadtree.
//!
//! Every node starts as a leaf holding up to `capacity` points. The insert
//! that would overflow a leaf splits it into four quadrants, moves its points
//! down, and from then on the node only routes points to its children.

use crate::{BoundingBox, Point, QuadTreeError};
use tracing::trace;

/// A quadtree node. The root owns the whole tree.
#[derive(Debug, Clone)]
pub struct QuadTree {
    region: BoundingBox,
    capacity: usize,
    /// Nodes at this level never subdivide. `None` means no limit.
    max_depth: Option<usize>,
    /// Distance from the root.
    level: usize,
    /// Always empty once `children` is set.
    points: Vec<Point>,
    children: Option<Box<Quadrants>>,
}

/// The four children of a subdivided node.
#[derive(Debug, Clone)]
pub struct Quadrants {
    top_left: QuadTree,
    top_right: QuadTree,
    bottom_left: QuadTree,
    bottom_right: QuadTree,
}

impl QuadTree {
    /// Create an empty tree covering `region`.
    ///
    /// The tree subdivides without limit. Inserting more than `capacity`
    /// points with identical coordinates therefore never terminates: no
    /// quadrant boundary can separate them. Use [`QuadTree::with_max_depth`]
    /// when the input may contain such duplicates.
    pub fn new(region: BoundingBox, capacity: usize) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::InvalidCapacity);
        }

        Ok(Self {
            region,
            capacity,
            max_depth: None,
            level: 0,
            points: Vec::new(),
            children: None,
        })
    }

    /// Create an empty tree whose nodes stop subdividing at `max_depth`.
    ///
    /// A leaf at that depth keeps accepting points past `capacity`.
    /// `max_depth == 0` makes the root a single unbounded bucket.
    pub fn with_max_depth(
        region: BoundingBox,
        capacity: usize,
        max_depth: usize,
    ) -> Result<Self, QuadTreeError> {
        let mut tree = Self::new(region, capacity)?;
        tree.max_depth = Some(max_depth);
        Ok(tree)
    }

    /// The region this node covers.
    #[inline]
    pub fn region(&self) -> &BoundingBox {
        &self.region
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Distance of this node from the root (root = 0).
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Check if this node has split into quadrants.
    #[inline]
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// The four children, if this node has subdivided.
    #[inline]
    pub fn children(&self) -> Option<&Quadrants> {
        self.children.as_deref()
    }

    /// Points held directly by this node. Empty for internal nodes.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Insert a point.
    ///
    /// Returns `false` if the point lies outside the region. Points on a
    /// boundary shared by several quadrants go to the first of them in
    /// top-left, top-right, bottom-left, bottom-right order.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.region.contains_point(p) {
            return false;
        }

        if self.children.is_none() {
            if self.points.len() < self.capacity || self.at_max_depth() {
                self.points.push(p);
                return true;
            }
            self.subdivide();
        }

        match self.children.as_deref_mut() {
            Some(children) => children.insert(p),
            None => false,
        }
    }

    /// Collect every point inside `query` (edges included).
    ///
    /// Results come back in traversal order. Points inserted more than once
    /// appear once per insert.
    pub fn points_within(&self, query: &BoundingBox) -> Vec<Point> {
        let mut found = Vec::new();
        self.collect_within(query, &mut found);
        found
    }

    /// Total number of points stored in this subtree.
    pub fn count_points(&self) -> usize {
        match self.children() {
            Some(children) => children.iter().map(QuadTree::count_points).sum(),
            None => self.points.len(),
        }
    }

    /// Height of this subtree. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(QuadTree::depth).max().unwrap_or(0),
            None => 0,
        }
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(QuadTree::node_count).sum::<usize>(),
            None => 1,
        }
    }

    fn at_max_depth(&self) -> bool {
        self.max_depth.is_some_and(|max| self.level >= max)
    }

    fn collect_within(&self, query: &BoundingBox, found: &mut Vec<Point>) {
        if !self.region.intersects_box(query) {
            return;
        }

        if let Some(children) = self.children() {
            for child in children.iter() {
                child.collect_within(query, found);
            }
            return;
        }

        if query.contains_box(&self.region) {
            found.extend_from_slice(&self.points);
            return;
        }

        found.extend(self.points.iter().copied().filter(|&p| query.contains_point(p)));
    }

    fn subdivide(&mut self) {
        let [top_left, top_right, bottom_left, bottom_right] = self.region.quadrants();
        let mut children = Box::new(Quadrants {
            top_left: self.child(top_left),
            top_right: self.child(top_right),
            bottom_left: self.child(bottom_left),
            bottom_right: self.child(bottom_right),
        });

        let points = std::mem::take(&mut self.points);
        trace!(region = %self.region, level = self.level, points = points.len(), "subdividing");

        for p in points {
            let placed = children.insert(p);
            debug_assert!(placed, "quadrants must cover the parent region");
        }

        self.children = Some(children);
    }

    fn child(&self, region: BoundingBox) -> QuadTree {
        QuadTree {
            region,
            capacity: self.capacity,
            max_depth: self.max_depth,
            level: self.level + 1,
            points: Vec::new(),
            children: None,
        }
    }
}

impl Quadrants {
    #[inline]
    pub fn top_left(&self) -> &QuadTree {
        &self.top_left
    }

    #[inline]
    pub fn top_right(&self) -> &QuadTree {
        &self.top_right
    }

    #[inline]
    pub fn bottom_left(&self) -> &QuadTree {
        &self.bottom_left
    }

    #[inline]
    pub fn bottom_right(&self) -> &QuadTree {
        &self.bottom_right
    }

    /// Iterate in top-left, top-right, bottom-left, bottom-right order.
    pub fn iter(&self) -> impl Iterator<Item = &QuadTree> {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ]
        .into_iter()
    }

    fn insert(&mut self, p: Point) -> bool {
        self.top_left.insert(p)
            || self.top_right.insert(p)
            || self.bottom_left.insert(p)
            || self.bottom_right.insert(p)
    }
}
