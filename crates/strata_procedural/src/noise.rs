//! # Value Noise
//!
//! Smooth, deterministic 2D noise used by both the heightmap pass and biome
//! selection.
//!
//! The seed acts as the second coordinate. Each seed is hashed to its own
//! lattice origin `(column offset, row)`, and terrain is sampled along that
//! row:
//!
//! ```text
//! sample_seeded(x, seed) = sample(x + offset(seed), row(seed))
//! ```
//!
//! Seeds live in `[0, 1)`, so using the raw value as `y` would keep every
//! world between lattice rows 0 and 1. Hashing spreads neighbouring seeds
//! over unrelated rows instead.
//!
//! ## Determinism Guarantee
//!
//! The lattice table is shuffled from a fixed key, not from the seed, so a
//! given `(x, seed)` pair produces the same value on every run.

use rand::Rng;

/// World seed for deterministic generation.
///
/// A real value in `[0, 1)`, drawn once per session and never changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSeed(f64);

impl WorldSeed {
    /// Creates a seed from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed in `[0, 1)` from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::thread_rng().gen_range(0.0..1.0))
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Derives a 64-bit stream key for a specific purpose.
    ///
    /// Used to key RNG streams (e.g. decoration scatter) off the seed.
    /// Every input bit affects every output bit, so seeds that differ only
    /// in their exponent (0.1 and 0.2) still get unrelated keys.
    #[inline]
    #[must_use]
    pub fn stream_key(self, purpose: u64) -> u64 {
        // splitmix64 finalizer
        let mut z = (self.0.to_bits() ^ purpose).wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Lattice origin `(column offset, row)` of this seed's terrain family.
    ///
    /// Both parts are integers in `[0, 256)`.
    #[inline]
    #[must_use]
    pub fn lattice_origin(self) -> (f64, f64) {
        let key = self.stream_key(LATTICE_STREAM);
        (f64::from((key >> 48) as u8), f64::from((key >> 56) as u8))
    }
}

/// Stream purpose for lattice origins.
const LATTICE_STREAM: u64 = 0x1A77;

/// 2D value noise generator.
///
/// Produces smooth, continuous values in `[0, 1)`.
///
/// # Example
///
/// ```rust
/// use strata_procedural::noise::ValueNoise;
///
/// let noise = ValueNoise::new();
/// let value = noise.sample(2.4, 0.37);
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Clone)]
pub struct ValueNoise {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl ValueNoise {
    /// Key used to shuffle the lattice when none is given.
    pub const DEFAULT_KEY: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Largest value a lattice point can hold.
    pub const MAX_VALUE: f64 = 255.0 / 256.0;

    /// Creates the noise field with the default lattice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(Self::DEFAULT_KEY)
    }

    /// Creates a noise field whose lattice is shuffled from `key`.
    ///
    /// A zero key would freeze the xorshift state, so it falls back to
    /// [`Self::DEFAULT_KEY`].
    #[must_use]
    pub fn with_key(key: u64) -> Self {
        let mut perm = [0u8; 512];

        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates shuffle with xorshift64
        let mut rng_state = if key == 0 { Self::DEFAULT_KEY } else { key };
        for i in (1..256).rev() {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        // Double the table to avoid index wrapping
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    /// Value stored at an integer lattice point, in `[0, MAX_VALUE]`.
    #[inline]
    fn lattice(&self, ix: i64, iy: i64) -> f64 {
        let xi = (ix & 255) as usize;
        let yi = (iy & 255) as usize;
        f64::from(self.perm[usize::from(self.perm[xi]) + yi]) / 256.0
    }

    /// Samples the noise field at `(x, y)`.
    ///
    /// # Returns
    ///
    /// A value in `[0, 1)` for finite input. NaN input yields NaN.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = fade(x - x0);
        let ty = fade(y - y0);

        // Saturating casts; the lattice wraps every 256 cells anyway
        let ix = x0 as i64;
        let iy = y0 as i64;

        let a = self.lattice(ix, iy);
        let b = self.lattice(ix.wrapping_add(1), iy);
        let c = self.lattice(ix, iy.wrapping_add(1));
        let d = self.lattice(ix.wrapping_add(1), iy.wrapping_add(1));

        let near = lerp(a, b, tx);
        let far = lerp(c, d, tx);
        lerp(near, far, ty).clamp(0.0, Self::MAX_VALUE)
    }

    /// Samples the terrain family of `seed` at `x`.
    ///
    /// Continuous in `x`. Distinct seeds read distinct lattice regions.
    #[inline]
    #[must_use]
    pub fn sample_seeded(&self, x: f64, seed: WorldSeed) -> f64 {
        let (offset, row) = seed.lattice_origin();
        self.sample(x + offset, row)
    }
}

impl Default for ValueNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Quintic fade curve. Zero first and second derivative at 0 and 1.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
