//! # STRATA Procedural Generation
//!
//! Deterministic terrain for a side-scrolling world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed, index and biome always produce the same chunk
//! 2. **Chunked**: The world is a strip of fixed-size square chunks
//! 3. **Forward streaming**: Chunks are produced once, as the player advances
//! 4. **Engine-free**: Generated chunks are returned as values, never rendered here
//!
//! ## Core Components
//!
//! - `ValueNoise`: smooth 2D noise, seed as second coordinate
//! - `BiomeCatalog`: fixed biome table and noise partition
//! - `ChunkGenerator`: height pass producing air/top/fill columns
//! - `DecorationPass`: optional liquids and decorations on top of the height pass
//! - `StreamingController`: per-tick chunk streaming state machine
//!
//! ## Example
//!
//! ```rust
//! use strata_procedural::{StreamingController, WorldConfig, WorldSeed};
//!
//! let controller = StreamingController::from_config(&WorldConfig::default())?;
//! let mut state = controller.init(WorldSeed::new(0.37));
//!
//! // Player standing at the origin
//! let outcome = controller.tick(&mut state, 0.0);
//! let generated = outcome.generated.expect("origin chunk is generated on the first tick");
//! assert_eq!(generated.index, 0);
//! # Ok::<(), strata_procedural::ProceduralError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod chunk;
pub mod config;
pub mod decoration;
pub mod error;
pub mod noise;
pub mod streaming;

pub use biome::{Biome, BiomeCatalog, BiomeDefinition, Liquid, TileId, BIOME_NOISE_RANGE};
pub use chunk::{column_height, Cell, Chunk, ChunkGenerator, DEFAULT_CHUNK_SIZE, MIN_CHUNK_SIZE};
pub use config::{
    DecorationConfig, DiagnosticsConfig, GenerationConfig, StreamingConfig, WorldConfig,
};
pub use decoration::DecorationPass;
pub use error::{ProceduralError, ProceduralResult};
pub use noise::{ValueNoise, WorldSeed};
pub use streaming::{
    ChunkGenerated, StreamPhase, StreamStats, StreamingController, StreamingState, TickOutcome,
    NOTHING_RENDERED,
};
