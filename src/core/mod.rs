//! Shared building blocks: RNG, difficulty tiers, move history records.
//!
//! Everything here is engine-agnostic. The engines in `lights_out` and
//! `hanoi` consume these types; the presentation layer owns their lifetimes.

pub mod difficulty;
pub mod record;
pub mod rng;

pub use difficulty::Difficulty;
pub use record::{MoveLog, MoveRecord};
pub use rng::{PuzzleRng, PuzzleRngState};
