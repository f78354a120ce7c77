//! Match randomness.
//!
//! Shuffles use a uniform random permutation; there is no seeding contract
//! for live matches, so the default constructor pulls entropy from the OS.
//! Tests seed explicitly for reproducible decks and coin flips.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source owned by a single match.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
}

impl MatchRng {
    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a deterministic RNG from a seed. Intended for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place with a uniform permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Fair coin flip, used to pick the starting player.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

impl Default for MatchRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
