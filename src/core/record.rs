//! Move history records for display and replay.
//!
//! History is a presentation concern: the engines never consult it. The
//! caller appends each accepted move after applying it, and renders the
//! log newest-first. The log is bounded so an unattended session cannot
//! grow without limit.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A recorded move with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    /// The accepted move.
    pub mv: M,

    /// 1-based sequence number within the session.
    pub sequence: u32,
}

impl<M> MoveRecord<M> {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: M, sequence: u32) -> Self {
        Self { mv, sequence }
    }
}

/// Append-only move log, bounded at [`MoveLog::MAX_ENTRIES`].
///
/// Backed by an `im::Vector`, so cloning a log snapshot is O(1) and the
/// caller can keep per-render snapshots cheaply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog<M: Clone> {
    entries: Vector<MoveRecord<M>>,
    next_sequence: u32,
}

impl<M: Clone> MoveLog<M> {
    /// Maximum retained entries; the oldest entry is evicted beyond this.
    pub const MAX_ENTRIES: usize = 200;

    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
            next_sequence: 1,
        }
    }

    /// Append an accepted move, evicting the oldest entry if full.
    ///
    /// Returns the sequence number assigned to the move. Sequence numbers
    /// keep counting across evictions, so they reflect the move count of
    /// the whole session, not the log window.
    pub fn record(&mut self, mv: M) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries.push_back(MoveRecord::new(mv, sequence));
        if self.entries.len() > Self::MAX_ENTRIES {
            self.entries.pop_front();
        }

        sequence
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord<M>> {
        self.entries.iter()
    }

    /// Iterate newest to oldest, the usual display order for history panes.
    pub fn newest_first(&self) -> impl Iterator<Item = &MoveRecord<M>> {
        self.entries.iter().rev()
    }

    /// Drop all entries. Sequence numbering continues from where it was.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<M: Clone> Default for MoveLog<M> {
    fn default() -> Self {
        Self::new()
    }
}
