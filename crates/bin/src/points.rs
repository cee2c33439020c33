//! Random point generation.

use quadtree::{BoundingBox, Point};
use rand::Rng;

/// Generate `count` points uniformly distributed over the closed `region`.
pub fn random_points<R: Rng + ?Sized>(
    rng: &mut R,
    region: &BoundingBox,
    count: usize,
) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(region.x_min()..=region.x_max()),
                rng.random_range(region.y_min()..=region.y_max()),
            )
        })
        .collect()
}
