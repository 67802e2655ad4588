//! Peg state and move validation.
//!
//! ## Invariants
//!
//! After every accepted move:
//! - each peg is strictly decreasing in rank from bottom to top;
//! - the disks across all pegs are exactly `{1..=disk_count}`, each once.
//!
//! A rejected move returns an error and leaves the state untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Disk rank: a positive integer where a larger number is a physically
/// larger disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(pub u8);

impl Disk {
    /// Create a disk with the given rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Get the disk's rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {}", self.0)
    }
}

/// Peg identifier: 0 (source), 1 (spare), or 2 (target).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PegId(pub u8);

impl PegId {
    /// The peg all disks start on.
    pub const SOURCE: PegId = PegId(0);
    /// The middle peg.
    pub const SPARE: PegId = PegId(1);
    /// The peg that must receive all disks.
    pub const TARGET: PegId = PegId(2);

    /// Create a new peg ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw peg index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this ID names one of the three pegs.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 3
    }

    /// Iterate over the three peg IDs.
    pub fn all() -> impl Iterator<Item = PegId> {
        (0..3).map(PegId)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peg {}", self.0)
    }
}

/// Errors from the Tower of Hanoi engine.
///
/// All variants are recoverable: the caller keeps the previous state and
/// may re-prompt the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// A peg ID outside 0..=2 was supplied.
    #[error("peg index {index} out of range (pegs are 0, 1, 2)")]
    InvalidPeg { index: u8 },

    /// Source and destination are the same peg.
    #[error("cannot move a disk from {peg} onto itself")]
    SelfMove { peg: PegId },

    /// The source peg has no disk to move.
    #[error("{from} has no disk to move")]
    EmptySource { from: PegId },

    /// The destination's top disk is smaller than the moved disk.
    #[error("cannot place {moved} on smaller {resting}")]
    SizeViolation { moved: Disk, resting: Disk },
}

type Peg = SmallVec<[Disk; 8]>;

/// The three pegs of a Tower of Hanoi game.
///
/// Disks are stored bottom-to-top. All transitions are functional: `apply`
/// returns a fresh state and never mutates the receiver. Pegs live inline
/// (no heap) for up to 8 disks, beyond the Expert tier's 6.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegState {
    pegs: [Peg; 3],
    disk_count: u8,
}

impl PegState {
    /// Create the starting position: all disks on the source peg, largest
    /// at the bottom.
    ///
    /// Panics unless `1 <= disk_count <= 63` (the closed-form move count
    /// must fit in a `u64`). Difficulty tiers use 3-6.
    #[must_use]
    pub fn new(disk_count: u8) -> Self {
        assert!(disk_count >= 1, "Must have at least 1 disk");
        assert!(disk_count <= 63, "At most 63 disks supported");

        let source: Peg = (1..=disk_count).rev().map(Disk::new).collect();

        Self {
            pegs: [source, SmallVec::new(), SmallVec::new()],
            disk_count,
        }
    }

    /// Number of disks in play.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Disks on a peg, bottom-to-top.
    ///
    /// Panics on an invalid peg ID; use `apply` for player input, which
    /// rejects invalid pegs with an error instead.
    #[must_use]
    pub fn peg(&self, peg: PegId) -> &[Disk] {
        assert!(peg.is_valid(), "invalid peg id {}", peg.0);
        &self.pegs[peg.index()]
    }

    /// Top disk of a peg, if any.
    #[must_use]
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        assert!(peg.is_valid(), "invalid peg id {}", peg.0);
        self.pegs[peg.index()].last().copied()
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// Returns the new state; the receiver is untouched. Fails with:
    /// - `InvalidPeg` if either ID is outside 0..=2,
    /// - `SelfMove` if `from == to`,
    /// - `EmptySource` if `from` holds no disk,
    /// - `SizeViolation` if the destination's top disk is smaller.
    pub fn apply(&self, from: PegId, to: PegId) -> Result<PegState, HanoiError> {
        for peg in [from, to] {
            if !peg.is_valid() {
                return Err(HanoiError::InvalidPeg { index: peg.0 });
            }
        }
        if from == to {
            return Err(HanoiError::SelfMove { peg: from });
        }

        let moved = self
            .top(from)
            .ok_or(HanoiError::EmptySource { from })?;

        if let Some(resting) = self.top(to) {
            if resting.rank() < moved.rank() {
                return Err(HanoiError::SizeViolation { moved, resting });
            }
        }

        let mut next = self.clone();
        next.pegs[from.index()].pop();
        next.pegs[to.index()].push(moved);

        debug_assert!(next.invariants_hold());
        Ok(next)
    }

    /// True iff the target peg holds every disk.
    ///
    /// Ordering within the peg is already guaranteed by the move rules, so
    /// a full target peg is necessarily `[N, ..., 1]` bottom-to-top.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let solved = self.pegs[PegId::TARGET.index()].len() == self.disk_count as usize;
        debug_assert!(!solved || self.invariants_hold());
        solved
    }

    /// Check the ordering and multiset invariants. Debug-only guard.
    fn invariants_hold(&self) -> bool {
        for peg in &self.pegs {
            if !peg.windows(2).all(|w| w[0].rank() > w[1].rank()) {
                return false;
            }
        }

        let mut ranks: Vec<u8> = self
            .pegs
            .iter()
            .flat_map(|peg| peg.iter().map(|d| d.rank()))
            .collect();
        ranks.sort_unstable();
        ranks == (1..=self.disk_count).collect::<Vec<_>>()
    }
}
