//! Score computation from caller-owned counters.
//!
//! The engines know nothing about time or score. The presentation layer
//! owns the timer and the move counter and passes both here once a puzzle
//! is solved. The resulting [`ScoreSummary`] serializes to the payload the
//! score backend expects.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::hanoi::min_moves;

/// Score for a solved Lights-Out puzzle.
///
/// With `max_moves = size²`: `base = max(0, (max_moves − moves) /
/// max_moves × 100)`, then `max(0, round(base − seconds / 2))`. Slow or
/// move-heavy solves bottom out at zero rather than going negative.
#[must_use]
pub fn lights_out_score(moves: u32, seconds: u32, size: usize) -> u32 {
    let max_moves = (size * size) as f64;
    let base = ((max_moves - f64::from(moves)) / max_moves * 100.0).max(0.0);

    (base - f64::from(seconds) / 2.0).round().max(0.0) as u32
}

/// Score for a solved Tower of Hanoi puzzle.
///
/// `base = min_moves(n) / max(moves, 1) × 100`, then
/// `max(0, round(base − seconds / 2))`. Optimal play scores a base of 100.
#[must_use]
pub fn hanoi_score(moves: u32, seconds: u32, disk_count: u8) -> u32 {
    let base = min_moves(disk_count) as f64 / f64::from(moves.max(1)) * 100.0;

    (base - f64::from(seconds) / 2.0).round().max(0.0) as u32
}

/// A finished game, ready for the caller to submit.
///
/// Field names serialize in camelCase to match the score endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Display name of the game.
    pub game: String,

    /// Computed score.
    pub score: u32,

    /// Elapsed seconds, caller-measured.
    pub time_taken: u32,

    /// Accepted moves, caller-counted.
    pub moves: u32,

    /// Difficulty tier played.
    pub level: Difficulty,

    /// Leaderboard category.
    pub category: String,
}

impl ScoreSummary {
    /// Summary for a solved Lights-Out puzzle.
    #[must_use]
    pub fn lights_out(level: Difficulty, moves: u32, seconds: u32) -> Self {
        Self {
            game: "Lights Out Puzzle".to_string(),
            score: lights_out_score(moves, seconds, level.grid_size()),
            time_taken: seconds,
            moves,
            level,
            category: "logic".to_string(),
        }
    }

    /// Summary for a solved Tower of Hanoi puzzle.
    #[must_use]
    pub fn hanoi(level: Difficulty, moves: u32, seconds: u32) -> Self {
        let disk_count = level.disk_count();
        Self {
            game: "Tower of Hanoi".to_string(),
            score: hanoi_score(moves, seconds, disk_count),
            time_taken: seconds,
            moves,
            level,
            category: format!("TowerOfHanoi-{disk_count}"),
        }
    }
}
