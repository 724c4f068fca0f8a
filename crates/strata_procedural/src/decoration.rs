//! # Decoration Pass
//!
//! Optional second pass over a height-pass chunk. Floods low columns with
//! the biome's liquid and scatters decorations on dry surfaces.
//!
//! The pass only ever rewrites air cells above a column's surface. Surface
//! and fill rows are left exactly as the height pass produced them.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::biome::Liquid;
use crate::chunk::{Cell, Chunk};
use crate::config::DecorationConfig;
use crate::error::ProceduralResult;
use crate::noise::WorldSeed;

/// Stream purpose for decoration rolls.
const DECORATION_STREAM: u64 = 0xDEC0;

/// Liquid and decoration post-pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationPass {
    enabled: bool,
    decoration_chance: f64,
    sea_level: usize,
}

impl DecorationPass {
    /// Creates the pass for chunks of `chunk_size`.
    ///
    /// A disabled config yields a pass that returns chunks untouched.
    ///
    /// # Errors
    ///
    /// Returns error if an enabled config is out of range for the chunk size.
    pub fn new(config: &DecorationConfig, chunk_size: usize) -> ProceduralResult<Self> {
        if config.enabled {
            config.validate(chunk_size)?;
        }
        Ok(Self {
            enabled: config.enabled,
            decoration_chance: config.decoration_chance,
            sea_level: config.sea_level,
        })
    }

    /// A pass that does nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            decoration_chance: 0.0,
            sea_level: 0,
        }
    }

    /// Whether the pass modifies chunks.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Applies liquids and decorations to a freshly generated chunk.
    ///
    /// Deterministic in `(seed, chunk.index(), chunk contents)`.
    #[must_use]
    pub fn apply(&self, mut chunk: Chunk, seed: WorldSeed) -> Chunk {
        if !self.enabled {
            return chunk;
        }

        let stream = (chunk.index() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.stream_key(DECORATION_STREAM ^ stream));
        let liquid = chunk.biome().liquid();

        for x in 0..chunk.size() {
            // One roll per column keeps the stream aligned across columns
            let roll: f64 = rng.gen();

            let Some(surface) = chunk.surface_row(x) else {
                continue;
            };

            if liquid != Liquid::None && surface > self.sea_level {
                chunk.set(x, self.sea_level, Cell::LiquidSurface);
                for y in self.sea_level + 1..surface {
                    chunk.set(x, y, Cell::LiquidBody);
                }
            } else if roll < self.decoration_chance {
                // surface >= 1, so the row above always exists
                chunk.set(x, surface - 1, Cell::Decoration);
            }
        }

        chunk
    }
}
