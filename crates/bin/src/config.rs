//! Tool configuration.

use quadtree::{BoundingBox, Point, QuadTree};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file, read from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "qtdraw.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Check settings that only fail once the tree is drawn.
    pub fn validate(&self) -> anyhow::Result<()> {
        crate::render::canvas_size(&self.tree.region()?, self.output.scale)?;
        Ok(())
    }
}

/// Root region and node settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
    #[serde(default = "default_region_size")]
    pub width: f64,
    #[serde(default = "default_region_size")]
    pub height: f64,
    /// Points a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Stop subdividing at this depth (unset = unbounded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    pub fn region(&self) -> anyhow::Result<BoundingBox> {
        Ok(BoundingBox::from_center(
            Point::new(self.center_x, self.center_y),
            self.width,
            self.height,
        )?)
    }

    /// Build an empty tree from these settings.
    pub fn build(&self) -> anyhow::Result<QuadTree> {
        let region = self.region()?;
        let tree = match self.max_depth {
            Some(max_depth) => QuadTree::with_max_depth(region, self.capacity, max_depth)?,
            None => QuadTree::new(region, self.capacity)?,
        };
        Ok(tree)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            width: default_region_size(),
            height: default_region_size(),
            capacity: default_capacity(),
            max_depth: None,
        }
    }
}

fn default_region_size() -> f64 {
    400.0
}
fn default_capacity() -> usize {
    8
}

/// Random point generation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PointsConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    /// Fixed RNG seed for reproducible pictures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
        }
    }
}

fn default_count() -> usize {
    100
}

/// Rendered image output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Pixels per world unit.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            scale: default_scale(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.png")
}
fn default_scale() -> f64 {
    1.0
}
