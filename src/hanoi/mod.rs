//! Tower of Hanoi puzzle engine.
//!
//! Three pegs hold disks of distinct ranks. One disk moves at a time, only
//! from the top of a peg, and never onto a smaller disk. The puzzle is
//! solved when every disk has reached the target peg.
//!
//! ## Key Types
//!
//! - `PegState`: the three pegs and their disks, bottom-to-top
//! - `Disk` / `PegId`: rank and peg identifiers
//! - `HanoiMove`: payload for caller-owned move history
//! - `min_moves`: the `2^n − 1` optimal move count
//! - `HanoiError`: illegal move rejection

pub mod moves;
pub mod pegs;

pub use moves::{min_moves, HanoiMove};
pub use pegs::{Disk, HanoiError, PegId, PegState};
