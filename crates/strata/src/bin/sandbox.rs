//! # STRATA Sandbox
//!
//! Headless run: a simulated player walks right at a fixed frame rate while
//! the world streams in behind the camera.
//!
//! ```text
//! RUST_LOG=debug cargo run --bin sandbox -- config/world.toml
//! ```

use std::error::Error;
use std::path::Path;

use strata::{GameLoop, StressVerdict, TileLayer};
use strata_procedural::WorldConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config/world.toml";

/// Frames to simulate.
const FRAMES: u32 = 3_600;

/// Player speed in cells per second.
const WALK_SPEED: f64 = 6.0;

const FRAME_DT: f64 = 1.0 / 60.0;

fn load_config(path: &Path) -> Result<WorldConfig, Box<dyn Error>> {
    if path.exists() {
        info!(path = %path.display(), "loading world config");
        Ok(WorldConfig::from_toml(path)?)
    } else {
        info!(path = %path.display(), "no config file, using defaults");
        Ok(WorldConfig::default())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    let config = load_config(Path::new(&path))?;

    let mut game = GameLoop::new(&config, TileLayer::new())?;
    info!(
        seed = game.state().seed().value(),
        chunk_size = game.controller().chunk_size(),
        "world ready"
    );

    let mut slowest_us = 0;
    for frame in 0..FRAMES {
        let player_x = f64::from(frame) * FRAME_DT * WALK_SPEED;
        let stats = game.tick(player_x, FRAME_DT);
        slowest_us = slowest_us.max(stats.tick_us);
    }

    let stream = game.state().stats();
    info!(
        frames = game.frame_count(),
        chunks = stream.chunks_generated,
        tiles = game.renderer().tiles().len(),
        biome_changes = stream.biome_changes,
        furthest = game.state().furthest_rendered(),
        fps = game.probe().fps(),
        slowest_us,
        "sandbox finished"
    );

    if game.probe().verdict() == StressVerdict::Failed {
        return Err("frame-rate self-test failed".into());
    }
    Ok(())
}
