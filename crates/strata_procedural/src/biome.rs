//! # Biome Catalog
//!
//! A fixed, closed set of biomes and the noise partition that picks one.
//!
//! Biomes carry no behavior. Each one names the tiles used for its top,
//! fill and decoration layers plus the liquid its pools are made of.
//!
//! ## Selection
//!
//! Biome noise is folded into `[0, BIOME_NOISE_RANGE)` and matched against
//! fixed thresholds in priority order:
//!
//! ```text
//! [0.0000, 0.0025) -> Grass
//! [0.0025, 0.0050) -> Desert
//! [0.0050, 0.0075) -> Hell
//! otherwise        -> Snow (default)
//! ```

use std::fmt;

use crate::noise::{ValueNoise, WorldSeed};

/// Liquid that fills pools in a biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Liquid {
    /// The biome has no pools.
    None,
    /// Water pools.
    Water,
    /// Lava pools.
    Lava,
}

/// Identifier of a placeable tile (a prefab name on the engine side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileId(&'static str);

impl TileId {
    /// Creates a tile identifier.
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the tile name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Static data for one biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiomeDefinition {
    /// Stable numeric identity.
    pub id: u8,
    /// Human-readable name.
    pub name: &'static str,
    /// Surface tile.
    pub top: TileId,
    /// Tile below the surface.
    pub fill: TileId,
    /// Tile scattered on the surface.
    pub decoration: TileId,
    /// Liquid used for pools.
    pub liquid: Liquid,
}

/// Biome definitions, indexed by [`Biome`] discriminant.
static DEFINITIONS: [BiomeDefinition; Biome::COUNT] = [
    BiomeDefinition {
        id: 0,
        name: "grass",
        top: TileId::new("grass"),
        fill: TileId::new("dirt"),
        decoration: TileId::new("flower"),
        liquid: Liquid::Water,
    },
    BiomeDefinition {
        id: 1,
        name: "desert",
        top: TileId::new("sand"),
        fill: TileId::new("sandstone"),
        decoration: TileId::new("cactus"),
        liquid: Liquid::None,
    },
    BiomeDefinition {
        id: 2,
        name: "hell",
        top: TileId::new("ash"),
        fill: TileId::new("brimstone"),
        decoration: TileId::new("fire"),
        liquid: Liquid::Lava,
    },
    BiomeDefinition {
        id: 3,
        name: "snow",
        top: TileId::new("snow"),
        fill: TileId::new("permafrost"),
        decoration: TileId::new("pine"),
        liquid: Liquid::Water,
    },
];

/// Biome types in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Biome {
    /// Grassland with water pools.
    Grass = 0,
    /// Dry desert, no pools.
    Desert = 1,
    /// Scorched ground with lava pools.
    Hell = 2,
    /// Snowfields with water pools.
    Snow = 3,
}

impl Biome {
    /// Number of biomes.
    pub const COUNT: usize = 4;

    /// All biomes in id order.
    pub const ALL: [Self; Self::COUNT] = [Self::Grass, Self::Desert, Self::Hell, Self::Snow];

    /// Returns the static definition of this biome.
    #[inline]
    #[must_use]
    pub fn definition(self) -> &'static BiomeDefinition {
        &DEFINITIONS[self as usize]
    }

    /// Stable numeric identity.
    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        self.definition().id
    }

    /// Human-readable name.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Surface tile.
    #[inline]
    #[must_use]
    pub fn top(self) -> TileId {
        self.definition().top
    }

    /// Tile below the surface.
    #[inline]
    #[must_use]
    pub fn fill(self) -> TileId {
        self.definition().fill
    }

    /// Decoration tile.
    #[inline]
    #[must_use]
    pub fn decoration(self) -> TileId {
        self.definition().decoration
    }

    /// Liquid used for pools.
    #[inline]
    #[must_use]
    pub fn liquid(self) -> Liquid {
        self.definition().liquid
    }

    /// Converts from a biome id. Unknown ids map to `None`.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Grass),
            1 => Some(Self::Desert),
            2 => Some(Self::Hell),
            3 => Some(Self::Snow),
            _ => None,
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exclusive width of the folded biome noise range.
pub const BIOME_NOISE_RANGE: f64 = 0.01;

/// Maps noise samples onto biomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BiomeCatalog;

impl BiomeCatalog {
    /// Biome returned when a value matches no explicit range.
    pub const DEFAULT: Biome = Biome::Snow;

    /// Exclusive upper bounds, checked in order. First match wins.
    const THRESHOLDS: [(f64, Biome); 3] = [
        (0.0025, Biome::Grass),
        (0.005, Biome::Desert),
        (0.0075, Biome::Hell),
    ];

    /// Creates the catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Selects the biome for a folded noise value.
    ///
    /// Ranges are inclusive-lower, exclusive-upper. Values past every
    /// threshold, negative values and NaN resolve to [`Self::DEFAULT`].
    #[must_use]
    pub fn select(&self, value: f64) -> Biome {
        if value.is_nan() || value < 0.0 {
            return Self::DEFAULT;
        }
        Self::THRESHOLDS
            .iter()
            .find(|(upper, _)| value < *upper)
            .map_or(Self::DEFAULT, |&(_, biome)| biome)
    }

    /// Samples biome noise for a chunk index and selects a biome.
    #[must_use]
    pub fn sample(&self, noise: &ValueNoise, chunk_index: i64, seed: WorldSeed) -> Biome {
        let raw = noise.sample_seeded(chunk_index as f64, seed);
        self.select(raw % BIOME_NOISE_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_match_discriminants() {
        for biome in Biome::ALL {
            assert_eq!(biome.id(), biome as u8);
            assert_eq!(Biome::from_id(biome.id()), Some(biome));
        }
        assert_eq!(Biome::from_id(4), None);
    }

    #[test]
    fn test_liquids() {
        assert_eq!(Biome::Grass.liquid(), Liquid::Water);
        assert_eq!(Biome::Desert.liquid(), Liquid::None);
        assert_eq!(Biome::Hell.liquid(), Liquid::Lava);
        assert_eq!(Biome::Snow.liquid(), Liquid::Water);
    }

    #[test]
    fn test_boundaries_inclusive_lower() {
        let catalog = BiomeCatalog::new();
        assert_eq!(catalog.select(0.0), Biome::Grass);
        assert_eq!(catalog.select(0.0025), Biome::Desert);
        assert_eq!(catalog.select(0.005), Biome::Hell);
        assert_eq!(catalog.select(0.0075), Biome::Snow);
        assert_eq!(catalog.select(0.009_999), Biome::Snow);
    }

    #[test]
    fn test_fallback_is_default() {
        let catalog = BiomeCatalog::new();
        assert_eq!(catalog.select(0.5), BiomeCatalog::DEFAULT);
        assert_eq!(catalog.select(-0.001), BiomeCatalog::DEFAULT);
        assert_eq!(catalog.select(f64::NAN), BiomeCatalog::DEFAULT);
    }

    #[test]
    fn test_coverage_no_gaps() {
        let catalog = BiomeCatalog::new();
        let mut counts = [0usize; Biome::COUNT];

        // Every value gets exactly one biome; ranges are contiguous and ordered
        let mut previous = Biome::Grass;
        for i in 0..10_000 {
            let value = f64::from(i) * BIOME_NOISE_RANGE / 10_000.0;
            let biome = catalog.select(value);
            assert!(biome as u8 >= previous as u8, "Ranges out of order at {value}");
            previous = biome;
            counts[biome as usize] += 1;
        }

        for (biome, count) in Biome::ALL.iter().zip(counts) {
            assert!(
                (2400..=2600).contains(&count),
                "{biome} covers {count} of 10000 samples"
            );
        }
    }

    #[test]
    fn test_nearby_seeds_give_unrelated_biome_sequences() {
        let catalog = BiomeCatalog::new();
        let noise = ValueNoise::new();

        for (s1, s2) in [(0.1, 0.2), (0.37, 0.45), (0.5, 0.6)] {
            let matching = (0..400)
                .filter(|&i| {
                    let index = i * 10;
                    catalog.sample(&noise, index, WorldSeed::new(s1))
                        == catalog.sample(&noise, index, WorldSeed::new(s2))
                })
                .count();

            // Independent picks agree about a quarter of the time
            assert!(matching < 180, "Seeds {s1} and {s2} agree on {matching}/400 biomes");
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let catalog = BiomeCatalog::new();
        let noise = ValueNoise::new();
        let seed = WorldSeed::new(0.37);

        for index in 0..50 {
            assert_eq!(
                catalog.sample(&noise, index, seed),
                catalog.sample(&noise, index, seed)
            );
        }
    }
}
