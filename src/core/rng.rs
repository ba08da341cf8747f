//! Seeded randomness for start-piece selection and random players.
//!
//! A single seed drives a whole self-play game: the root generator picks
//! the start piece and hands each color its own stream via `fork`, so
//! the choices of one player never shift the choices of another.
//!
//! ```
//! use blokus_rules::core::GameRng;
//!
//! let mut root = GameRng::new(7);
//! let mut blue = root.fork();
//!
//! let mut replay = GameRng::new(7);
//! let mut blue_again = replay.fork();
//! assert_eq!(blue.gen_range_usize(0..400), blue_again.gen_range_usize(0..400));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment separating the seeds of successive forks.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed so it can derive child streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Derive the next child stream. The n-th fork of a given seed is
    /// always the same stream, whatever was drawn from the parent.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index in `range`. Used for reservoir sampling over a move
    /// stream of unknown length.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform pick from `items`, `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
