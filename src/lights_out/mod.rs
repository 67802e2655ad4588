//! Lights-Out puzzle engine.
//!
//! An N×N grid of lights. Toggling a cell flips it and its four
//! axis-adjacent neighbors; the puzzle is solved when every light is off.
//!
//! ## Key Types
//!
//! - `Board`: immutable row-major grid of cell states
//! - `generate`: solvable-by-construction puzzle generator
//! - `Hint` / `best_hint`: greedy one-ply play assist
//! - `LightsOutError`: out-of-range toggle rejection

pub mod board;
pub mod generate;
pub mod hint;

pub use board::{Board, LightsOutError};
pub use generate::generate;
pub use hint::{best_hint, Hint};
