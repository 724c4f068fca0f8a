//! # Streaming Walk Tests
//!
//! Simulates a player walking through the world and checks the streaming
//! controller's forward-only contract.

use strata_procedural::{
    GenerationConfig, StreamPhase, StreamingConfig, StreamingController, WorldConfig, WorldSeed,
    NOTHING_RENDERED,
};

fn controller(chunk_size: usize, biome_period: i64) -> StreamingController {
    let config = WorldConfig {
        generation: GenerationConfig {
            chunk_size,
            frequency: 0.05,
        },
        streaming: StreamingConfig { biome_period },
        ..WorldConfig::default()
    };
    StreamingController::from_config(&config).expect("valid config")
}

/// Test: Walking from X=0 up to (not reaching) X=95 with 10-cell chunks.
#[test]
fn test_walk_to_95_generates_0_through_9() {
    let controller = controller(10, 10);
    let mut state = controller.init(WorldSeed::new(0.37));

    let mut generated = Vec::new();
    let mut evaluations = Vec::new();

    // Half-cell steps; the last position is 94.5, which rounds to chunk 9
    for step in 0..190 {
        let x = f64::from(step) * 0.5;
        let outcome = controller.tick(&mut state, x);

        if outcome.biome_evaluated.is_some() {
            evaluations.push(state.player_chunk());
        }
        if let Some(event) = outcome.generated {
            assert_eq!(event.index, event.chunk.index());
            generated.push(event.index);
        }
    }

    assert_eq!(generated, (0..10).collect::<Vec<_>>());
    assert_eq!(state.furthest_rendered(), 9);
    assert_eq!(evaluations, vec![0]);
    assert_eq!(state.stats().biome_evaluations, 1);
    assert_eq!(state.stats().chunks_generated, 10);
    assert_eq!(state.stats().ticks, 190);
}

/// Test: Furthest index never decreases and no index is generated twice.
#[test]
fn test_streaming_monotonicity() {
    let controller = controller(16, 10);
    let mut state = controller.init(WorldSeed::new(0.81));

    let mut previous = NOTHING_RENDERED;
    let mut seen = std::collections::HashSet::new();
    let mut x = 0.0;

    for step in 0..5_000 {
        // Mostly forward, with a stumble back every so often
        x += if step % 7 == 0 { -3.0 } else { 1.25 };
        let outcome = controller.tick(&mut state, x);

        assert!(state.furthest_rendered() >= previous, "Furthest index went backwards");
        previous = state.furthest_rendered();

        if let Some(event) = outcome.generated {
            assert!(seen.insert(event.index), "Chunk {} generated twice", event.index);
            assert_eq!(event.index, state.furthest_rendered());
        }
    }

    let expected: std::collections::HashSet<i64> = (0..=state.furthest_rendered()).collect();
    assert_eq!(seen, expected, "Every crossed chunk generated exactly once");
}

/// Test: Biome re-evaluation fires on every period boundary crossed.
#[test]
fn test_rebiome_every_period() {
    let controller = controller(10, 10);
    let mut state = controller.init(WorldSeed::new(0.37));

    let mut boundaries = Vec::new();
    for step in 0..1_000 {
        let outcome = controller.tick(&mut state, f64::from(step));
        if outcome.biome_evaluated.is_some() {
            boundaries.push(state.player_chunk());
        }
    }

    // Positions 0..=999 reach chunk 100
    assert_eq!(boundaries, (0..=10).map(|i| i * 10).collect::<Vec<_>>());
}

/// Test: Every generated chunk carries the biome active at that tick.
#[test]
fn test_generated_chunk_uses_active_biome() {
    let controller = controller(16, 10);
    let mut state = controller.init(WorldSeed::new(0.44));

    for step in 0..3_000 {
        let outcome = controller.tick(&mut state, f64::from(step));
        if outcome.phase() == StreamPhase::Generate {
            let event = outcome.generated.expect("generate phase has a chunk");
            assert_eq!(event.chunk.biome(), state.active_biome());
            if let Some(biome) = outcome.biome_evaluated {
                assert_eq!(event.chunk.biome(), biome);
            }
        }
    }
}

/// Test: Two sessions with the same seed stream identical worlds.
#[test]
fn test_sessions_are_reproducible() {
    let controller = controller(16, 10);
    let mut first = controller.init(WorldSeed::new(0.29));
    let mut second = controller.init(WorldSeed::new(0.29));

    for step in 0..2_000 {
        let x = f64::from(step) * 0.75;
        let a = controller.tick(&mut first, x);
        let b = controller.tick(&mut second, x);
        assert_eq!(a, b, "Sessions diverged at x={x}");
    }
    assert_eq!(first, second);
}

/// Test: Teleporting forward generates only the destination chunk.
#[test]
fn test_teleport_skips_intermediate_chunks() {
    let controller = controller(16, 10);
    let mut state = controller.init(WorldSeed::new(0.37));

    let _ = controller.tick(&mut state, 0.0);
    let outcome = controller.tick(&mut state, 16.0 * 25.0);

    assert_eq!(outcome.generated.map(|e| e.index), Some(25));
    assert_eq!(state.furthest_rendered(), 25);
    assert_eq!(state.stats().chunks_generated, 2);
}
