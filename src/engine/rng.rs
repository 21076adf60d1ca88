//! Deterministic random number generation.
//!
//! Every randomized decision on the card (placement, blink speed, ornament
//! color) draws from one PCG stream.
//!
//! # Reproducibility Guarantee
//!
//! Given the same seed, the card renders bitwise-identical markup across
//! runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Seeded random source for the card.
#[derive(Debug, Clone)]
pub struct CardRng {
    /// Seed the stream was created from.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so the card can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate an integer uniformly from `{min, min + 1, ..., max}`.
    ///
    /// Scales one unit draw `u` as `floor(u * (max - min + 1)) + min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinsel::engine::rng::CardRng;
    ///
    /// let mut rng = CardRng::new(42);
    /// let draw = rng.int_inclusive(1, 3);
    /// assert!((1..=3).contains(&draw));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "Invalid range: min {min} > max {max}");

        let span = i64::from(max) - i64::from(min) + 1;
        let offset = (self.gen_f64() * span as f64).floor() as i64;

        // offset < span, so the sum lies in [min, max]
        (i64::from(min) + offset) as i32
    }

    /// Float-bounds variant of [`Self::int_inclusive`].
    ///
    /// Rounds `min` up and `max` down before sampling.
    ///
    /// # Panics
    ///
    /// Panics if a bound is not finite, or if the rounded range is empty
    /// (e.g. `1.2..=1.8`).
    pub fn int_inclusive_f64(&mut self, min: f64, max: f64) -> i32 {
        assert!(min.is_finite() && max.is_finite(), "Range bounds must be finite");

        #[allow(clippy::cast_possible_truncation)]
        let (lo, hi) = (min.ceil() as i32, max.floor() as i32);
        self.int_inclusive(lo, hi)
    }
}
