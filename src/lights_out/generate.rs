//! Solvable-by-construction puzzle generation.
//!
//! Toggling is its own inverse, so any board reached by toggles from the
//! all-off state can be returned to all-off by toggling the same cells
//! again. Generation therefore scrambles a solved board with random
//! toggles instead of searching for solvable configurations.

use crate::core::PuzzleRng;

use super::board::Board;

/// Generate a solvable `size × size` board.
///
/// Applies a uniformly random number of toggles in `[size², 2·size²)` at
/// uniformly random cell indices, starting from the all-off board. Always
/// succeeds for `size ≥ 1` (panics on zero, like `Board::all_off`).
///
/// The same RNG state always yields the same board; fork one stream per
/// puzzle to make sessions replayable.
#[must_use]
pub fn generate(size: usize, rng: &mut PuzzleRng) -> Board {
    let mut board = Board::all_off(size);
    let total = board.cell_count();

    let scramble_toggles = rng.gen_range_usize(total..2 * total);
    for _ in 0..scramble_toggles {
        let index = rng.gen_range_usize(0..total);
        board = board.toggled_in_bounds(index);
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_board_shape() {
        let mut rng = PuzzleRng::new(42);

        for size in 3..=6 {
            let board = generate(size, &mut rng);
            assert_eq!(board.size(), size);
            assert_eq!(board.cell_count(), size * size);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut rng1 = PuzzleRng::new(7);
        let mut rng2 = PuzzleRng::new(7);

        assert_eq!(generate(5, &mut rng1), generate(5, &mut rng2));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = PuzzleRng::new(1);
        let mut rng2 = PuzzleRng::new(2);

        // 25 cells make a collision astronomically unlikely.
        assert_ne!(generate(5, &mut rng1), generate(5, &mut rng2));
    }

    #[test]
    fn test_boards_are_not_degenerate() {
        let mut rng = PuzzleRng::new(42);

        // Over many draws, boards with both lit and unlit cells must appear.
        let mut saw_mixed = false;
        for _ in 0..50 {
            let board = generate(4, &mut rng);
            let lit = board.lit_count();
            if lit > 0 && lit < board.cell_count() {
                saw_mixed = true;
            }
        }
        assert!(saw_mixed);
    }

    #[test]
    fn test_size_one_generation() {
        let mut rng = PuzzleRng::new(42);
        let board = generate(1, &mut rng);

        assert_eq!(board.cell_count(), 1);
    }
}
