//! Move payloads and the closed-form optimal move count.

use serde::{Deserialize, Serialize};

use super::pegs::{Disk, PegId};

/// An accepted move, as the caller records it for history display.
///
/// The engine does not keep history; the caller reads the moving disk with
/// [`PegState::top`](super::PegState::top) before applying and appends the
/// record to its own [`MoveLog`](crate::core::MoveLog).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiMove {
    /// Peg the disk left.
    pub from: PegId,

    /// Peg the disk landed on.
    pub to: PegId,

    /// The disk that moved.
    pub disk: Disk,
}

impl std::fmt::Display for HanoiMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} moved from {} to {}", self.disk, self.from, self.to)
    }
}

/// Minimum number of moves to solve classic 3-peg Hanoi with `disk_count`
/// disks: `2^n − 1`.
///
/// Used for score comparison only; the engine never enforces it. Panics if
/// `disk_count` exceeds 63 (the result would overflow `u64`), matching the
/// bound on [`PegState::new`](super::PegState::new).
#[must_use]
pub fn min_moves(disk_count: u8) -> u64 {
    assert!(disk_count <= 63, "At most 63 disks supported");
    (1u64 << disk_count) - 1
}
