//! Difficulty tiers shared by both puzzle engines.
//!
//! The presentation layer offers four named tiers. Each tier fixes the
//! Lights-Out grid side and the Hanoi disk count; the engines themselves
//! accept any positive size and stay agnostic of the tier names.

use serde::{Deserialize, Serialize};

/// Difficulty tier selected by the player.
///
/// Serializes as its label ("Easy", "Medium", ...), which is also the
/// string the score backend expects in the `level` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers, in ascending order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Side length of the Lights-Out grid for this tier.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    /// Number of Hanoi disks for this tier.
    #[must_use]
    pub const fn disk_count(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    /// The tier's display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
