//! # Chunk Rendering
//!
//! Turns generated chunks into placed tiles.
//!
//! The engine side owns the actual scene. This module defines the seam it
//! implements ([`ChunkRenderer`]) and ships [`TileLayer`], an in-memory
//! renderer that records every placement for the headless loop and tests.
//!
//! ## Tile Mapping
//!
//! ```text
//! Air            -> nothing
//! Top            -> biome top tile
//! Fill           -> biome fill tile
//! Decoration     -> biome decoration tile
//! LiquidSurface  -> lavaTop  (Lava biomes) | waterTop (otherwise)
//! LiquidBody     -> lava     (Lava biomes) | water    (otherwise)
//! ```
//!
//! Cell `(x, y)` of a chunk rendered at index `i` lands at world
//! `(i * size + x, -y)`.

use std::fmt;

use strata_procedural::{Biome, Cell, Chunk, Liquid, TileId};

/// Water surface tile.
pub const WATER_TOP: TileId = TileId::new("waterTop");
/// Water body tile.
pub const WATER: TileId = TileId::new("water");
/// Lava surface tile.
pub const LAVA_TOP: TileId = TileId::new("lavaTop");
/// Lava body tile.
pub const LAVA: TileId = TileId::new("lava");

/// Consumer of generated chunks.
pub trait ChunkRenderer {
    /// Materializes `chunk` at chunk index `at_index`.
    fn render(&mut self, chunk: &Chunk, at_index: i64);
}

/// What a placed tile is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Biome surface tile.
    Top(TileId),
    /// Biome fill tile.
    Fill(TileId),
    /// Biome decoration tile.
    Decoration(TileId),
    /// Surface row of a liquid pool.
    LiquidSurface(TileId),
    /// Body of a liquid pool.
    LiquidBody(TileId),
}

impl TileKind {
    /// Tile kind for a cell of a chunk in `biome`. Air has none.
    #[must_use]
    pub fn for_cell(cell: Cell, biome: Biome) -> Option<Self> {
        let lava = biome.liquid() == Liquid::Lava;
        match cell {
            Cell::Air => None,
            Cell::Top => Some(Self::Top(biome.top())),
            Cell::Fill => Some(Self::Fill(biome.fill())),
            Cell::Decoration => Some(Self::Decoration(biome.decoration())),
            Cell::LiquidSurface => {
                Some(Self::LiquidSurface(if lava { LAVA_TOP } else { WATER_TOP }))
            }
            Cell::LiquidBody => Some(Self::LiquidBody(if lava { LAVA } else { WATER })),
        }
    }

    /// The tile to instantiate.
    #[must_use]
    pub const fn tile(self) -> TileId {
        match self {
            Self::Top(tile)
            | Self::Fill(tile)
            | Self::Decoration(tile)
            | Self::LiquidSurface(tile)
            | Self::LiquidBody(tile) => tile,
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tile(), f)
    }
}

/// One tile placed in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedTile {
    /// What was placed.
    pub kind: TileKind,
    /// World position `(x, y)`.
    pub position: (i64, i64),
}

/// In-memory renderer that records placements.
#[derive(Clone, Debug, Default)]
pub struct TileLayer {
    tiles: Vec<PlacedTile>,
    chunks_rendered: u64,
}

impl TileLayer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tile placed so far, in placement order.
    #[must_use]
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    /// Number of `render` calls.
    #[inline]
    #[must_use]
    pub const fn chunks_rendered(&self) -> u64 {
        self.chunks_rendered
    }

    /// Tile at a world position, if one was placed there.
    ///
    /// Linear scan; meant for tests and diagnostics.
    #[must_use]
    pub fn tile_at(&self, position: (i64, i64)) -> Option<&PlacedTile> {
        self.tiles.iter().rev().find(|tile| tile.position == position)
    }
}

impl ChunkRenderer for TileLayer {
    fn render(&mut self, chunk: &Chunk, at_index: i64) {
        let origin = at_index.wrapping_mul(chunk.size() as i64);
        let biome = chunk.biome();

        self.tiles.extend(chunk.cells().filter_map(|(x, y, cell)| {
            TileKind::for_cell(cell, biome).map(|kind| PlacedTile {
                kind,
                position: (origin.wrapping_add(x as i64), -(y as i64)),
            })
        }));
        self.chunks_rendered += 1;
    }
}
