//! # World Streaming
//!
//! Forward-only chunk streaming driven by the player's X position.
//!
//! ## Tick
//!
//! ```text
//! current = round(player_x / chunk_size)
//!
//! current % period == 0 && current > furthest  -> re-evaluate biome
//! current > furthest                           -> generate chunk, furthest = current
//! otherwise                                    -> idle
//! ```
//!
//! Biome re-evaluation always runs before generation in the same tick, so
//! the chunk generated on a boundary already uses the new biome.
//!
//! Nothing is ever regenerated or unloaded. Chunks behind the player, and
//! chunks on the negative side of the origin, are never produced by the
//! streaming loop.
//!
//! Biome re-evaluation only happens on multiples of the period. A player
//! whose first crossed chunk is not a multiple keeps the initial biome
//! until the next multiple is reached.

use tracing::{debug, info, warn};

use crate::biome::{Biome, BiomeCatalog};
use crate::chunk::{Chunk, ChunkGenerator};
use crate::config::{StreamingConfig, WorldConfig};
use crate::decoration::DecorationPass;
use crate::error::ProceduralResult;
use crate::noise::WorldSeed;

/// Furthest index before anything has been generated.
pub const NOTHING_RENDERED: i64 = -1;

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Ticks processed.
    pub ticks: u64,
    /// Chunks generated.
    pub chunks_generated: u64,
    /// Biome re-evaluations run.
    pub biome_evaluations: u64,
    /// Re-evaluations that switched to a different biome.
    pub biome_changes: u64,
}

/// Mutable streaming state for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamingState {
    /// Chunk index the player was in on the last valid tick.
    player_chunk: i64,
    /// Highest chunk index generated so far.
    furthest_rendered: i64,
    /// Biome used for the next generated chunk.
    active_biome: Biome,
    /// Session seed. Never changes.
    seed: WorldSeed,
    /// Counters.
    stats: StreamStats,
}

impl StreamingState {
    /// Fresh state: nothing generated, default biome.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            player_chunk: 0,
            furthest_rendered: NOTHING_RENDERED,
            active_biome: BiomeCatalog::DEFAULT,
            seed,
            stats: StreamStats::default(),
        }
    }

    /// Chunk index the player was in on the last valid tick.
    #[inline]
    #[must_use]
    pub const fn player_chunk(&self) -> i64 {
        self.player_chunk
    }

    /// Highest chunk index generated so far ([`NOTHING_RENDERED`] initially).
    #[inline]
    #[must_use]
    pub const fn furthest_rendered(&self) -> i64 {
        self.furthest_rendered
    }

    /// Biome used for the next generated chunk.
    #[inline]
    #[must_use]
    pub const fn active_biome(&self) -> Biome {
        self.active_biome
    }

    /// Session seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Session counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> StreamStats {
        self.stats
    }
}

/// Which transition a tick took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamPhase {
    /// Nothing to do.
    Idle,
    /// Biome re-evaluated, no chunk generated.
    Rebiome,
    /// A new chunk was generated.
    Generate,
}

/// A chunk that must be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkGenerated {
    /// Chunk index to render at.
    pub index: i64,
    /// The generated chunk.
    pub chunk: Chunk,
}

/// Result of one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Biome picked by a re-evaluation this tick.
    pub biome_evaluated: Option<Biome>,
    /// Chunk generated this tick.
    pub generated: Option<ChunkGenerated>,
}

impl TickOutcome {
    /// The last transition taken this tick.
    #[must_use]
    pub fn phase(&self) -> StreamPhase {
        match (&self.biome_evaluated, &self.generated) {
            (_, Some(_)) => StreamPhase::Generate,
            (Some(_), None) => StreamPhase::Rebiome,
            (None, None) => StreamPhase::Idle,
        }
    }
}

/// Decides when terrain must be produced and produces it.
#[derive(Clone)]
pub struct StreamingController {
    generator: ChunkGenerator,
    decoration: DecorationPass,
    catalog: BiomeCatalog,
    biome_period: i64,
}

impl StreamingController {
    /// Creates a controller.
    ///
    /// # Errors
    ///
    /// Returns error if the streaming config is out of range.
    pub fn new(
        generator: ChunkGenerator,
        decoration: DecorationPass,
        config: &StreamingConfig,
    ) -> ProceduralResult<Self> {
        config.validate()?;
        Ok(Self {
            generator,
            decoration,
            catalog: BiomeCatalog::new(),
            biome_period: config.biome_period,
        })
    }

    /// Builds generator, decoration pass and controller from one config.
    ///
    /// # Errors
    ///
    /// Returns error if any section is out of range.
    pub fn from_config(config: &WorldConfig) -> ProceduralResult<Self> {
        config.validate()?;
        let generator = ChunkGenerator::new(&config.generation)?;
        let decoration = DecorationPass::new(&config.decoration, generator.chunk_size())?;
        Self::new(generator, decoration, &config.streaming)
    }

    /// Starts a session.
    #[must_use]
    pub fn init(&self, seed: WorldSeed) -> StreamingState {
        StreamingState::new(seed)
    }

    /// The height-pass generator.
    #[inline]
    #[must_use]
    pub const fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    /// Chunk size of generated chunks.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.generator.chunk_size()
    }

    /// Chunk index containing world X, or `None` for non-finite input.
    #[must_use]
    pub fn chunk_index(&self, player_x: f64) -> Option<i64> {
        let index = (player_x / self.chunk_size() as f64).round();
        index.is_finite().then_some(index as i64)
    }

    /// Produces the chunk at `index` exactly as streaming would.
    ///
    /// Safe to call for already-streamed indices: generation is pure.
    #[must_use]
    pub fn generate(&self, index: i64, seed: WorldSeed, biome: Biome) -> Chunk {
        let chunk = self.generator.generate_default(index, seed, biome);
        self.decoration.apply(chunk, seed)
    }

    /// Advances streaming by one tick.
    pub fn tick(&self, state: &mut StreamingState, player_x: f64) -> TickOutcome {
        state.stats.ticks += 1;

        let Some(current) = self.chunk_index(player_x) else {
            warn!(player_x, "ignoring non-finite player position");
            return TickOutcome::default();
        };
        state.player_chunk = current;

        let mut outcome = TickOutcome::default();
        if current <= state.furthest_rendered {
            return outcome;
        }

        if current.rem_euclid(self.biome_period) == 0 {
            let biome = self
                .catalog
                .sample(self.generator.noise(), current, state.seed);
            state.stats.biome_evaluations += 1;
            if biome != state.active_biome {
                state.stats.biome_changes += 1;
                info!(index = current, from = %state.active_biome, to = %biome, "biome changed");
            }
            state.active_biome = biome;
            outcome.biome_evaluated = Some(biome);
        }

        let chunk = self.generate(current, state.seed, state.active_biome);
        debug!(index = current, biome = %state.active_biome, "generated chunk");

        state.furthest_rendered = current;
        state.stats.chunks_generated += 1;
        outcome.generated = Some(ChunkGenerated {
            index: current,
            chunk,
        });
        outcome
    }
}
