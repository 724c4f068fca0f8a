//! # STRATA
//!
//! Host side of the side-scrolling world: renders streamed chunks, runs
//! the frame loop and watches the frame rate.
//!
//! ```text
//! player_x ──> GameLoop ──> StreamingController ──> Chunk
//!                 │                                   │
//!                 ├──> FrameRateProbe                 v
//!                 └─────────────────────────────> ChunkRenderer
//! ```
//!
//! ## Modules
//!
//! - `render`: Renderer seam and the in-memory tile layer
//! - `diagnostics`: Frame-rate self-test
//! - `game_loop`: Frame orchestration

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod diagnostics;
pub mod game_loop;
pub mod render;

pub use strata_procedural as procedural;

pub use diagnostics::{FrameRateProbe, StressVerdict};
pub use game_loop::{FrameStats, GameLoop, TARGET_FRAME_TIME};
pub use render::{ChunkRenderer, PlacedTile, TileKind, TileLayer};
