//! Greedy one-ply hint search.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// A suggested toggle and how many lights it saves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Cell index to toggle.
    pub index: usize,

    /// `lit_count` before minus `lit_count` after the toggle.
    /// Negative when every toggle makes the board worse.
    pub improvement: i64,
}

/// Find the single toggle that reduces the lit count the most.
///
/// Evaluates every cell exhaustively; ties go to the lowest index. This is
/// a one-ply greedy heuristic, not a solver: boards whose solutions pass
/// through a temporarily higher lit count can be hinted away from the
/// optimal line. The hint is a play assist, not guaranteed-optimal play.
#[must_use]
pub fn best_hint(board: &Board) -> Hint {
    let lit_before = board.lit_count() as i64;

    let mut best = Hint {
        index: 0,
        improvement: i64::MIN,
    };

    for index in 0..board.cell_count() {
        let lit_after = board.toggled_in_bounds(index).lit_count() as i64;
        let improvement = lit_before - lit_after;

        if improvement > best.improvement {
            best = Hint { index, improvement };
        }
    }

    best
}
