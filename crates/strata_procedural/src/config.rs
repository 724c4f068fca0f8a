//! # World Configuration
//!
//! All tunables live in one TOML file loaded once at startup. Every field
//! has a default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! seed = 0.37
//!
//! [generation]
//! chunk_size = 16
//! frequency = 0.05
//!
//! [streaming]
//! biome_period = 10
//!
//! [decoration]
//! enabled = true
//! decoration_chance = 0.15
//! sea_level = 10
//!
//! [diagnostics]
//! min_fps = 20.0
//! warmup_seconds = 10.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chunk::{DEFAULT_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::error::{ProceduralError, ProceduralResult};
use crate::noise::WorldSeed;

/// Height pass settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Chunk side length in cells.
    pub chunk_size: usize,
    /// Noise frequency along world X.
    pub frequency: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            frequency: 0.05,
        }
    }
}

impl GenerationConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns error if `chunk_size < 3` or `frequency` is not a positive
    /// finite number.
    pub fn validate(&self) -> ProceduralResult<()> {
        if self.chunk_size < MIN_CHUNK_SIZE {
            return Err(ProceduralError::InvalidConfig(format!(
                "chunk_size must be at least {MIN_CHUNK_SIZE}, got {}",
                self.chunk_size
            )));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(ProceduralError::InvalidConfig(format!(
                "frequency must be positive and finite, got {}",
                self.frequency
            )));
        }
        Ok(())
    }
}

/// Streaming controller settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamingConfig {
    /// Biome is re-evaluated on chunk indices that are multiples of this.
    pub biome_period: i64,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self { biome_period: 10 }
    }
}

impl StreamingConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns error if `biome_period` is not positive.
    pub fn validate(&self) -> ProceduralResult<()> {
        if self.biome_period <= 0 {
            return Err(ProceduralError::InvalidConfig(format!(
                "biome_period must be positive, got {}",
                self.biome_period
            )));
        }
        Ok(())
    }
}

/// Decoration and liquid post-pass settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorationConfig {
    /// Whether the pass runs at all.
    pub enabled: bool,
    /// Chance in `[0, 1]` that a dry surface column gets a decoration.
    pub decoration_chance: f64,
    /// Row of liquid surfaces. Columns whose surface sits below it flood.
    pub sea_level: usize,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            decoration_chance: 0.15,
            sea_level: 10,
        }
    }
}

impl DecorationConfig {
    /// Checks ranges against the chunk size.
    ///
    /// # Errors
    ///
    /// Returns error if the chance is outside `[0, 1]` or the sea level is
    /// not strictly inside the chunk.
    pub fn validate(&self, chunk_size: usize) -> ProceduralResult<()> {
        if !(0.0..=1.0).contains(&self.decoration_chance) {
            return Err(ProceduralError::InvalidConfig(format!(
                "decoration_chance must be within [0, 1], got {}",
                self.decoration_chance
            )));
        }
        if self.sea_level == 0 || self.sea_level >= chunk_size {
            return Err(ProceduralError::InvalidConfig(format!(
                "sea_level must be within [1, {}), got {}",
                chunk_size, self.sea_level
            )));
        }
        Ok(())
    }
}

/// Frame-rate self-test settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Averaged frame rate below which the self-test fails.
    pub min_fps: f64,
    /// Seconds of play before a sustained pass is reported.
    pub warmup_seconds: f64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            min_fps: 20.0,
            warmup_seconds: 10.0,
        }
    }
}

impl DiagnosticsConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns error if either value is negative or not finite.
    pub fn validate(&self) -> ProceduralResult<()> {
        for (name, value) in [("min_fps", self.min_fps), ("warmup_seconds", self.warmup_seconds)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ProceduralError::InvalidConfig(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Complete world configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Fixed world seed in `[0, 1)`. Drawn from entropy when absent.
    pub seed: Option<f64>,
    /// Height pass.
    pub generation: GenerationConfig,
    /// Streaming controller.
    pub streaming: StreamingConfig,
    /// Decoration post-pass.
    pub decoration: DecorationConfig,
    /// Frame-rate self-test.
    pub diagnostics: DiagnosticsConfig,
}

impl WorldConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML or a value is out of range.
    pub fn from_toml_str(text: &str) -> ProceduralResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or a
    /// value is out of range.
    pub fn from_toml(path: impl AsRef<Path>) -> ProceduralResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProceduralError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> ProceduralResult<()> {
        if let Some(seed) = self.seed {
            if !(0.0..1.0).contains(&seed) {
                return Err(ProceduralError::InvalidConfig(format!(
                    "seed must be within [0, 1), got {seed}"
                )));
            }
        }
        self.generation.validate()?;
        self.streaming.validate()?;
        if self.decoration.enabled {
            self.decoration.validate(self.generation.chunk_size)?;
        }
        self.diagnostics.validate()
    }

    /// Session seed: the configured one, or a fresh draw.
    #[must_use]
    pub fn world_seed(&self) -> WorldSeed {
        self.seed.map_or_else(WorldSeed::from_entropy, WorldSeed::new)
    }
}
