//! PNG rendering of a quadtree for visual debugging.
//!
//! Region borders are white, region centers green, stored points red, all on
//! a black background. Only the tree's read-only accessors are used.

use glam::DVec2;
use image::{Rgba, RgbaImage};
use quadtree::{BoundingBox, Point, QuadTree};
use std::path::Path;

pub const BACKGROUND: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
pub const BORDER: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const CENTER: Rgba<u8> = Rgba([0x00, 0xff, 0x00, 0xff]);
pub const POINT: Rgba<u8> = Rgba([0xff, 0x00, 0x00, 0xff]);

/// Largest image side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Pixel size of the image for `region` at `scale`.
pub fn canvas_size(region: &BoundingBox, scale: f64) -> anyhow::Result<(u32, u32)> {
    anyhow::ensure!(
        scale.is_finite() && scale > 0.0,
        "Render scale must be finite and positive, got {}",
        scale
    );

    let side = |extent: f64| -> anyhow::Result<u32> {
        let pixels = (extent * scale).ceil();
        anyhow::ensure!(
            pixels <= MAX_CANVAS_SIDE as f64,
            "Canvas of {} x {} at scale {} exceeds {} pixels per side",
            region.width(),
            region.height(),
            scale,
            MAX_CANVAS_SIDE
        );
        Ok((pixels as u32).max(1))
    };

    Ok((side(region.width())?, side(region.height())?))
}

/// Maps world coordinates onto an image. World y grows up, image y grows down.
struct Canvas {
    image: RgbaImage,
    /// World position of the top-left pixel.
    origin: DVec2,
    scale: f64,
}

impl Canvas {
    fn new(region: &BoundingBox, scale: f64) -> anyhow::Result<Self> {
        let (width, height) = canvas_size(region, scale)?;

        Ok(Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
            origin: DVec2::new(region.x_min(), region.y_max()),
            scale,
        })
    }

    /// World point to pixel, clamped to the image.
    fn to_pixel(&self, p: Point) -> (u32, u32) {
        let x = ((p.x - self.origin.x) * self.scale).floor() as u32;
        let y = ((self.origin.y - p.y) * self.scale).floor() as u32;
        (
            x.min(self.image.width() - 1),
            y.min(self.image.height() - 1),
        )
    }

    fn plot(&mut self, p: Point, color: Rgba<u8>) {
        let (x, y) = self.to_pixel(p);
        self.image.put_pixel(x, y, color);
    }

    fn outline(&mut self, b: &BoundingBox, color: Rgba<u8>) {
        let (x0, y0) = self.to_pixel(Point::new(b.x_min(), b.y_max()));
        let (x1, y1) = self.to_pixel(Point::new(b.x_max(), b.y_min()));

        for x in x0..=x1 {
            self.image.put_pixel(x, y0, color);
            self.image.put_pixel(x, y1, color);
        }
        for y in y0..=y1 {
            self.image.put_pixel(x0, y, color);
            self.image.put_pixel(x1, y, color);
        }
    }
}

/// Render the whole tree. One world unit maps to `scale` pixels.
pub fn render(tree: &QuadTree, scale: f64) -> anyhow::Result<RgbaImage> {
    let mut canvas = Canvas::new(tree.region(), scale)?;

    visit(tree, &mut |node: &QuadTree| canvas.outline(node.region(), BORDER));
    visit(tree, &mut |node: &QuadTree| canvas.plot(node.region().center(), CENTER));
    for p in tree.points_within(tree.region()) {
        canvas.plot(p, POINT);
    }

    Ok(canvas.image)
}

/// Render the tree and write it to `path` as a PNG.
pub fn save(tree: &QuadTree, scale: f64, path: impl AsRef<Path>) -> anyhow::Result<()> {
    render(tree, scale)?.save(path)?;
    Ok(())
}

fn visit(node: &QuadTree, f: &mut impl FnMut(&QuadTree)) {
    f(node);
    if let Some(children) = node.children() {
        for child in children.iter() {
            visit(child, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> QuadTree {
        let region = BoundingBox::from_center(Point::ZERO, 10.0, 10.0).unwrap();
        let mut tree = QuadTree::new(region, 1).unwrap();
        assert!(tree.insert(Point::new(2.5, 2.5)));
        assert!(tree.insert(Point::new(-2.5, -3.5)));
        tree
    }

    #[test]
    fn test_render_layers() {
        let img = render(&sample_tree(), 1.0).unwrap();
        assert_eq!(img.dimensions(), (10, 10));

        // Points
        assert_eq!(*img.get_pixel(7, 2), POINT);
        assert_eq!(*img.get_pixel(2, 8), POINT);
        // Root center
        assert_eq!(*img.get_pixel(5, 5), CENTER);
        // Borders: outer corners and the inner split line
        assert_eq!(*img.get_pixel(0, 0), BORDER);
        assert_eq!(*img.get_pixel(9, 9), BORDER);
        assert_eq!(*img.get_pixel(5, 1), BORDER);
        // Untouched
        assert_eq!(*img.get_pixel(1, 8), BACKGROUND);
    }

    #[test]
    fn test_render_scale() {
        let img = render(&sample_tree(), 2.0).unwrap();
        assert_eq!(img.dimensions(), (20, 20));
        assert_eq!(*img.get_pixel(15, 5), POINT);
    }

    #[test]
    fn test_render_degenerate_region() {
        let region = BoundingBox::from_center(Point::new(1.0, 1.0), 0.0, 0.0).unwrap();
        let mut tree = QuadTree::new(region, 1).unwrap();
        tree.insert(Point::new(1.0, 1.0));

        let img = render(&tree, 1.0).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(*img.get_pixel(0, 0), POINT);
    }

    #[test]
    fn test_render_rejects_oversized_canvas() {
        let tree = sample_tree();
        assert!(render(&tree, 1e9).is_err());
        assert!(render(&tree, 0.0).is_err());
        assert!(render(&tree, -1.0).is_err());
        assert!(render(&tree, f64::NAN).is_err());
        assert!(render(&tree, f64::INFINITY).is_err());

        let path =
            std::env::temp_dir().join(format!("qtdraw-oversized-{}.png", std::process::id()));
        assert!(save(&tree, 1e9, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_canvas_size_limit() {
        let region = BoundingBox::from_center(Point::ZERO, 512.0, 128.0).unwrap();
        assert_eq!(canvas_size(&region, 1.0).unwrap(), (512, 128));
        assert_eq!(canvas_size(&region, 0.5).unwrap(), (256, 64));

        // 512 * 32 lands exactly on the limit.
        assert_eq!(canvas_size(&region, 32.0).unwrap(), (MAX_CANVAS_SIDE, 4096));
        assert!(canvas_size(&region, 32.5).is_err());
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join(format!("qtdraw-render-{}.png", std::process::id()));
        save(&sample_tree(), 1.0, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(*img.get_pixel(7, 2), POINT);
        std::fs::remove_file(&path).unwrap();
    }
}
