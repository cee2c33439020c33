//! qtdraw - fill a quadtree with random points and render it to a PNG.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod points;
mod render;

use config::{Config, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("qtdraw v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;
    config.validate()?;
    info!("Loaded configuration from {}", config_path);

    let mut tree = config.tree.build()?;
    info!("  Region: {}", tree.region());
    info!("  Capacity: {}", tree.capacity());
    match tree.max_depth() {
        Some(depth) => info!("  Max depth: {}", depth),
        None => info!("  Max depth: unbounded"),
    }

    let count = config.points.count;
    let points = match config.points.seed {
        Some(seed) => {
            points::random_points(&mut StdRng::seed_from_u64(seed), tree.region(), count)
        }
        None => points::random_points(&mut rand::rng(), tree.region(), count),
    };

    let mut rejected = 0usize;
    for p in points {
        if !tree.insert(p) {
            warn!("Rejected point ({}, {}) outside {}", p.x, p.y, tree.region());
            rejected += 1;
        }
    }

    info!(
        "Inserted {} points ({} rejected) into {} nodes, depth {}",
        tree.count_points(),
        rejected,
        tree.node_count(),
        tree.depth()
    );

    render::save(&tree, config.output.scale, &config.output.path)?;
    info!("Wrote {}", config.output.path.display());

    Ok(())
}
