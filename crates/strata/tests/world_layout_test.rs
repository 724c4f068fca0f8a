//! # World Layout Tests
//!
//! Runs the full loop and checks what ends up placed in the world.

use std::collections::{HashMap, HashSet};

use strata::procedural::{DecorationConfig, StreamPhase, WorldConfig};
use strata::{GameLoop, TileKind, TileLayer};

fn config(decoration: bool) -> WorldConfig {
    WorldConfig {
        seed: Some(0.37),
        decoration: DecorationConfig {
            enabled: decoration,
            ..DecorationConfig::default()
        },
        ..WorldConfig::default()
    }
}

fn walk(config: &WorldConfig, frames: u32) -> GameLoop<TileLayer> {
    let mut game = GameLoop::new(config, TileLayer::new()).expect("valid config");
    for frame in 0..frames {
        let _ = game.tick(f64::from(frame) * 0.25, 1.0 / 60.0);
    }
    game
}

/// Test: No two tiles share a world position.
#[test]
fn test_no_overlapping_tiles() {
    let game = walk(&config(true), 4_000);

    let mut seen = HashSet::new();
    for tile in game.renderer().tiles() {
        assert!(seen.insert(tile.position), "Two tiles at {:?}", tile.position);
    }
}

/// Test: Every streamed column has exactly one surface tile, at y <= -1.
#[test]
fn test_one_surface_per_world_column() {
    let game = walk(&config(false), 4_000);
    let size = game.controller().chunk_size() as i64;
    let furthest = game.state().furthest_rendered();

    let mut surfaces = vec![0u32; ((furthest + 1) * size) as usize];
    for tile in game.renderer().tiles() {
        if let TileKind::Top(_) = tile.kind {
            let (x, y) = tile.position;
            assert!((-(size - 1)..=-1).contains(&y), "Surface at y={y}");
            surfaces[x as usize] += 1;
        }
    }
    assert!(surfaces.iter().all(|&count| count == 1));
}

/// Test: Tiles come from the biome the chunk was streamed with.
#[test]
fn test_tiles_match_streamed_biomes() {
    let config = config(true);
    let mut game = GameLoop::new(&config, TileLayer::new()).expect("valid config");

    let mut streamed = HashMap::new();
    for frame in 0..4_000 {
        let stats = game.tick(f64::from(frame) * 0.25, 1.0 / 60.0);
        if stats.phase == StreamPhase::Generate {
            streamed.insert(game.state().furthest_rendered(), game.state().active_biome());
        }
    }

    let size = game.controller().chunk_size() as i64;
    let seed = game.state().seed();
    let mut chunks = HashMap::new();
    for tile in game.renderer().tiles() {
        let index = tile.position.0.div_euclid(size);
        let x = tile.position.0.rem_euclid(size) as usize;
        let y = (-tile.position.1) as usize;

        let biome = streamed[&index];
        let chunk = chunks
            .entry(index)
            .or_insert_with(|| game.controller().generate(index, seed, biome));
        assert_eq!(
            TileKind::for_cell(chunk.get(x, y), biome),
            Some(tile.kind),
            "Tile at {:?} does not match its {biome} chunk",
            tile.position
        );
    }
    assert_eq!(streamed.len() as u64, game.renderer().chunks_rendered());
}
