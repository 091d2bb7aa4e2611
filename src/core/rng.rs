//! Deterministic random number generation for dice and seating.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls and seatings
//! - **Forkable**: Each player's die gets its own independent stream
//! - **Stable**: Derived streams use fixed arithmetic, not `std` hashing
//!
//! ```
//! use dice_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut die_rng = rng.fork();
//!
//! let face = die_rng.roll_face(6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same fork counter, same stream.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(again.roll_face(6), face);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Deterministic RNG backing every random decision in a match.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged and the
    /// run reproduced later with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a named purpose.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain (FNV-1a over the context bytes).
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = context
            .bytes()
            .fold(self.seed ^ FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Roll a single face uniformly in `1..=faces`.
    ///
    /// `faces` must be at least 1; callers validate this at construction.
    pub fn roll_face(&mut self, faces: u32) -> u32 {
        self.inner.gen_range(1..=faces)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
