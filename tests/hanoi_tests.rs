//! Tower of Hanoi engine integration tests.
//!
//! Drives the engine the way a UI would: initialize for a difficulty tier,
//! issue moves (legal and illegal), watch for the solved state, and build
//! the score summary from caller-owned counters.

use proptest::prelude::*;

use brainbox_core::core::{Difficulty, MoveLog};
use brainbox_core::hanoi::{min_moves, Disk, HanoiError, HanoiMove, PegId, PegState};
use brainbox_core::scoring::ScoreSummary;

/// Append the classic recursive solution for `n` disks to `out`.
fn push_solution(n: u8, from: PegId, to: PegId, via: PegId, out: &mut Vec<(PegId, PegId)>) {
    if n == 0 {
        return;
    }
    push_solution(n - 1, from, via, to, out);
    out.push((from, to));
    push_solution(n - 1, via, to, from, out);
}

/// The full optimal move sequence from the starting position.
fn optimal_solution(disk_count: u8) -> Vec<(PegId, PegId)> {
    let mut out = Vec::new();
    push_solution(disk_count, PegId::SOURCE, PegId::TARGET, PegId::SPARE, &mut out);
    out
}

/// Check the engine invariants from the outside: strictly decreasing ranks
/// per peg, and all disks present exactly once.
fn assert_invariants(state: &PegState) {
    let mut ranks = Vec::new();

    for peg in PegId::all() {
        let disks = state.peg(peg);
        for pair in disks.windows(2) {
            assert!(
                pair[0].rank() > pair[1].rank(),
                "{peg} not strictly decreasing: {disks:?}"
            );
        }
        ranks.extend(disks.iter().map(|d| d.rank()));
    }

    ranks.sort_unstable();
    let expected: Vec<u8> = (1..=state.disk_count()).collect();
    assert_eq!(ranks, expected, "disk multiset violated");
}

// =============================================================================
// Solvability Tests
// =============================================================================

/// Test that the recursive solution solves every tier in exactly the
/// closed-form minimum number of moves.
#[test]
fn test_optimal_solution_all_tiers() {
    for tier in Difficulty::ALL {
        let n = tier.disk_count();
        let mut state = PegState::new(n);
        let solution = optimal_solution(n);

        assert_eq!(solution.len() as u64, min_moves(n));

        for (i, &(from, to)) in solution.iter().enumerate() {
            assert!(!state.is_solved(), "solved early at move {i}");
            state = state.apply(from, to).unwrap();
            assert_invariants(&state);
        }

        assert!(state.is_solved());
    }
}

/// Test the concrete 3-disk scenario move by move.
#[test]
fn test_three_disk_scenario() {
    let ranks = |state: &PegState, peg: u8| -> Vec<u8> {
        state.peg(PegId::new(peg)).iter().map(|d| d.rank()).collect()
    };

    let mut state = PegState::new(3);
    assert_eq!(ranks(&state, 0), vec![3, 2, 1]);

    let script: [(u8, u8, [&[u8]; 3]); 7] = [
        (0, 2, [&[3, 2], &[], &[1]]),
        (0, 1, [&[3], &[2], &[1]]),
        (2, 1, [&[3], &[2, 1], &[]]),
        (0, 2, [&[], &[2, 1], &[3]]),
        (1, 0, [&[1], &[2], &[3]]),
        (1, 2, [&[1], &[], &[3, 2]]),
        (0, 2, [&[], &[], &[3, 2, 1]]),
    ];

    for (i, &(from, to, expected)) in script.iter().enumerate() {
        state = state.apply(PegId::new(from), PegId::new(to)).unwrap();
        for peg in 0..3u8 {
            assert_eq!(ranks(&state, peg), expected[peg as usize], "move {i}, peg {peg}");
        }
    }

    assert!(state.is_solved());
    assert_eq!(min_moves(3), 7);
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Test that every illegal move kind is rejected with its own error and
/// leaves the state unchanged.
#[test]
fn test_illegal_moves_rejected() {
    let state = PegState::new(4);
    let before = state.clone();

    let cases = [
        (PegId::SPARE, PegId::TARGET, HanoiError::EmptySource { from: PegId::SPARE }),
        (PegId::SOURCE, PegId::SOURCE, HanoiError::SelfMove { peg: PegId::SOURCE }),
        (PegId::new(5), PegId::TARGET, HanoiError::InvalidPeg { index: 5 }),
    ];

    for (from, to, expected) in cases {
        assert_eq!(state.apply(from, to).unwrap_err(), expected);
        assert_eq!(state, before);
    }

    // Size violation needs one legal setup move.
    let state = state.apply(PegId::SOURCE, PegId::TARGET).unwrap();
    let before = state.clone();
    let err = state.apply(PegId::SOURCE, PegId::TARGET).unwrap_err();
    assert_eq!(
        err,
        HanoiError::SizeViolation {
            moved: Disk::new(2),
            resting: Disk::new(1)
        }
    );
    assert_eq!(state, before);
}

// =============================================================================
// Play-Through Tests
// =============================================================================

/// Test a full UI-style session: apply the optimal line, record history,
/// and build the submission payload.
#[test]
fn test_play_through_with_log_and_score() {
    let tier = Difficulty::Easy;
    let mut state = PegState::new(tier.disk_count());
    let mut log: MoveLog<HanoiMove> = MoveLog::new();

    for (from, to) in optimal_solution(tier.disk_count()) {
        let disk = state.top(from).unwrap();
        state = state.apply(from, to).unwrap();
        log.record(HanoiMove { from, to, disk });
    }

    assert!(state.is_solved());
    assert_eq!(log.len(), 7);

    // Newest entry is the final move of disk 1 onto the target peg.
    let last = log.newest_first().next().unwrap();
    assert_eq!(last.mv.disk, Disk::new(1));
    assert_eq!(last.mv.to, PegId::TARGET);
    assert_eq!(last.sequence, 7);

    let summary = ScoreSummary::hanoi(tier, log.len() as u32, 30);
    assert_eq!(summary.score, 85);
    assert_eq!(summary.category, "TowerOfHanoi-3");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Arbitrary command sequences preserve both engine invariants, and
    /// every rejected command leaves the state exactly as it was.
    #[test]
    fn prop_invariants_under_arbitrary_commands(
        disk_count in 1u8..7,
        commands in prop::collection::vec((0u8..4, 0u8..4), 0..120),
    ) {
        let mut state = PegState::new(disk_count);

        for (from, to) in commands {
            let before = state.clone();
            match state.apply(PegId::new(from), PegId::new(to)) {
                Ok(next) => state = next,
                Err(_) => prop_assert_eq!(&state, &before),
            }
            assert_invariants(&state);
        }
    }

    /// A solved state is exactly "target peg holds all disks".
    #[test]
    fn prop_solved_matches_target_occupancy(
        disk_count in 1u8..7,
        commands in prop::collection::vec((0u8..3, 0u8..3), 0..120),
    ) {
        let mut state = PegState::new(disk_count);

        for (from, to) in commands {
            if let Ok(next) = state.apply(PegId::new(from), PegId::new(to)) {
                state = next;
            }
            let on_target = state.peg(PegId::TARGET).len();
            prop_assert_eq!(state.is_solved(), on_target == disk_count as usize);
        }
    }
}
