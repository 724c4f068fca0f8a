//! # Chunk System
//!
//! The world is a horizontal strip of square chunks. Each chunk is a
//! `size x size` grid of [`Cell`] codes plus the biome it was generated with.
//!
//! ## Grid Layout
//!
//! Cells are stored column-major: `cells[x * size + y]`. Row `y = 0` is the
//! top of the chunk and rows grow downward, so a column reads sky first.
//!
//! ## Height Pass
//!
//! For every column the generator samples the seed's noise family at
//! `frequency * (chunk_index * size + x)`, scales it to the chunk height and clamps it to
//! `[1, size - 1]`. Rows above that height are air, the height row is the
//! surface and everything below is fill. No caves, no overhangs.

use bytemuck::NoUninit;

use crate::biome::Biome;
use crate::config::GenerationConfig;
use crate::error::ProceduralResult;
use crate::noise::{ValueNoise, WorldSeed};

/// Default chunk width/height in cells.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Smallest chunk size that leaves room for air, surface and fill.
pub const MIN_CHUNK_SIZE: usize = 3;

/// Terrain role of a single chunk cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, NoUninit)]
#[repr(u8)]
pub enum Cell {
    /// Empty space. Renders nothing.
    #[default]
    Air = 0,
    /// Surface tile of the column.
    Top = 1,
    /// Ground below the surface.
    Fill = 2,
    /// Surface decoration (plants, props).
    Decoration = 3,
    /// Top row of a liquid pool.
    LiquidSurface = 4,
    /// Liquid below the pool surface.
    LiquidBody = 5,
}

impl Cell {
    /// Returns the raw cell code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts from a raw cell code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Air),
            1 => Some(Self::Top),
            2 => Some(Self::Fill),
            3 => Some(Self::Decoration),
            4 => Some(Self::LiquidSurface),
            5 => Some(Self::LiquidBody),
            _ => None,
        }
    }

    /// Returns true for empty cells.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns true for either liquid code.
    #[inline]
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::LiquidSurface | Self::LiquidBody)
    }
}

/// A generated chunk.
///
/// Read-only once it leaves the generator; only crate-internal passes
/// write cells, and only before handing the chunk out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk index along the world X axis.
    index: i64,
    /// Side length in cells.
    size: usize,
    /// Biome active when this chunk was generated.
    biome: Biome,
    /// Cell data (indexed as `[x * size + y]`).
    cells: Box<[Cell]>,
}

impl Chunk {
    /// Creates an all-air chunk.
    pub(crate) fn empty(index: i64, size: usize, biome: Biome) -> Self {
        Self {
            index,
            size,
            biome,
            cells: vec![Cell::Air; size * size].into_boxed_slice(),
        }
    }

    /// Chunk index along the world X axis.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> i64 {
        self.index
    }

    /// Side length in cells.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Biome used to generate this chunk.
    #[inline]
    #[must_use]
    pub const fn biome(&self) -> Biome {
        self.biome
    }

    /// Gets the cell at local coordinates. Out of bounds reads are air.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.size && y < self.size {
            self.cells[x * self.size + y]
        } else {
            Cell::Air
        }
    }

    /// Sets the cell at local coordinates. Out of bounds writes are dropped.
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            self.cells[x * self.size + y] = cell;
        }
    }

    /// Returns one column, top row first.
    #[must_use]
    pub fn column(&self, x: usize) -> Option<&[Cell]> {
        (x < self.size).then(|| &self.cells[x * self.size..(x + 1) * self.size])
    }

    /// Row of the surface cell in column `x`.
    #[must_use]
    pub fn surface_row(&self, x: usize) -> Option<usize> {
        self.column(x)?.iter().position(|&cell| cell == Cell::Top)
    }

    /// Iterates over every cell as `(x, y, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }

    /// Raw cell codes, column-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells[..])
    }

    /// World position of a local cell.
    ///
    /// X is `index * size + x`. Y is negated: rows grow downward in the grid
    /// but upward in world space.
    #[inline]
    #[must_use]
    pub fn world_position(&self, x: usize, y: usize) -> (i64, i64) {
        (
            self.index
                .wrapping_mul(self.size as i64)
                .wrapping_add(x as i64),
            -(y as i64),
        )
    }
}

/// Converts a noise sample into a column height.
///
/// Scales `noise_value` to the chunk, rounds, and clamps to `[1, size - 1]`
/// so every column has at least one air row and one fill row. NaN lands on
/// the minimum height.
#[inline]
#[must_use]
pub fn column_height(noise_value: f64, size: usize) -> usize {
    let scaled = (noise_value * size as f64).round() as i64;
    scaled.clamp(1, size as i64 - 1) as usize
}

/// Height-pass chunk generator.
#[derive(Clone)]
pub struct ChunkGenerator {
    /// Shared noise field.
    noise: ValueNoise,
    /// Side length of generated chunks.
    size: usize,
    /// Frequency used by [`Self::generate_default`].
    frequency: f64,
}

impl ChunkGenerator {
    /// Creates a generator from validated settings.
    ///
    /// # Errors
    ///
    /// Returns error if the chunk size or frequency is out of range.
    pub fn new(config: &GenerationConfig) -> ProceduralResult<Self> {
        Self::with_noise(config, ValueNoise::new())
    }

    /// Creates a generator over a specific noise field.
    ///
    /// # Errors
    ///
    /// Returns error if the chunk size or frequency is out of range.
    pub fn with_noise(config: &GenerationConfig, noise: ValueNoise) -> ProceduralResult<Self> {
        config.validate()?;
        Ok(Self {
            noise,
            size: config.chunk_size,
            frequency: config.frequency,
        })
    }

    /// Side length of generated chunks.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.size
    }

    /// Configured frequency.
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// The noise field shared with biome selection.
    #[inline]
    #[must_use]
    pub const fn noise(&self) -> &ValueNoise {
        &self.noise
    }

    /// Surface row of column `x` in chunk `chunk_index`.
    #[must_use]
    pub fn column_height(
        &self,
        chunk_index: i64,
        x: usize,
        frequency: f64,
        seed: WorldSeed,
    ) -> usize {
        let world_x = chunk_index as f64 * self.size as f64 + x as f64;
        let sample = self.noise.sample_seeded(frequency * world_x, seed);
        column_height(sample, self.size)
    }

    /// Generates a chunk.
    ///
    /// Pure: the same arguments always produce an identical grid.
    /// A non-positive `frequency` still yields a well-formed chunk.
    #[must_use]
    pub fn generate(
        &self,
        chunk_index: i64,
        frequency: f64,
        seed: WorldSeed,
        biome: Biome,
    ) -> Chunk {
        let mut chunk = Chunk::empty(chunk_index, self.size, biome);

        for x in 0..self.size {
            let height = self.column_height(chunk_index, x, frequency, seed);

            chunk.set(x, height, Cell::Top);
            for y in height + 1..self.size {
                chunk.set(x, y, Cell::Fill);
            }
        }

        chunk
    }

    /// Generates a chunk at the configured frequency.
    #[must_use]
    pub fn generate_default(&self, chunk_index: i64, seed: WorldSeed, biome: Biome) -> Chunk {
        self.generate(chunk_index, self.frequency, seed, biome)
    }
}
