//! # brainbox-core
//!
//! Puzzle engines for the BrainBox brain-training suite.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machines**: Each engine is a set of total, synchronous
//!    transition functions over immutable value types. No I/O, no timing,
//!    no global state.
//!
//! 2. **UI-Agnostic**: The presentation layer issues move commands and
//!    observes solved state. Rendering, timers, score submission, and
//!    session handling live entirely outside this crate.
//!
//! 3. **Injected Randomness**: Puzzle generation draws from a seeded,
//!    forkable RNG passed in by the caller. The same seed always produces
//!    the same puzzle.
//!
//! ## Architecture
//!
//! - **Functional Updates**: Transitions return fresh state values backed
//!   by persistent data structures (`im`) or inline small vectors
//!   (`smallvec`), so callers that re-render off value equality never see
//!   aliased mutation.
//!
//! - **Recoverable Errors**: Illegal moves are rejected with typed errors
//!   and leave state untouched. The caller re-prompts; nothing is fatal.
//!
//! ## Modules
//!
//! - `core`: RNG, difficulty tiers, move history records
//! - `lights_out`: N×N toggle-grid puzzle (generate, toggle, hint)
//! - `hanoi`: three-peg disk-stack puzzle (init, move, solved detection)
//! - `scoring`: score computation from caller-owned counters

pub mod core;
pub mod hanoi;
pub mod lights_out;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Difficulty,
    MoveLog, MoveRecord,
    PuzzleRng, PuzzleRngState,
};

pub use crate::lights_out::{Board, Hint, LightsOutError, generate};

pub use crate::hanoi::{Disk, HanoiError, HanoiMove, PegId, PegState, min_moves};

pub use crate::scoring::{ScoreSummary, hanoi_score, lights_out_score};
