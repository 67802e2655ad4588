//! Deterministic random number generation for puzzle instances.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical puzzle sequence
//! - **Forkable**: Derive an independent stream per puzzle instance
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! A session holds one `PuzzleRng` seeded at login or page load. Each
//! restart forks a fresh stream, so replaying a session seed reproduces
//! every puzzle the player saw:
//!
//! ```
//! use brainbox_core::core::PuzzleRng;
//!
//! let mut session = PuzzleRng::new(42);
//!
//! // Fork a stream for the next puzzle
//! let mut puzzle_rng = session.fork();
//!
//! // Forks are deterministic: a second session with the same seed
//! // produces the same fork.
//! let mut session2 = PuzzleRng::new(42);
//! let mut puzzle_rng2 = session2.fork();
//! assert_eq!(
//!     puzzle_rng.gen_range_usize(0..1000),
//!     puzzle_rng2.gen_range_usize(0..1000),
//! );
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for puzzle generation.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Never reads ambient entropy: callers supply the seed.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// give every puzzle instance in a session its own stream.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for session checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
