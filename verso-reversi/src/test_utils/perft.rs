//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move resolution against hand-checked counts, and
//! for benchmarking it.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Dims, Side};

pub fn run_perft(dims: Dims, depth: u64) -> u64 {
    leaves_below(&Board::standard(dims), Side::White, depth, false)
}

fn leaves_below(board: &Board, to_move: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 || board.is_full() {
        return 1;
    }

    let all_moves = board.legal_moves(to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|(_, next)| leaves_below(next, !to_move, depth - 1, false))
        .sum()
}

// The first plies stay clear of the rim, so these counts line up with the
// published 8x8 sequence.
#[test]
fn perft_01() {
    assert_eq!(run_perft(Dims::default(), 1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(Dims::default(), 2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(Dims::default(), 3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(Dims::default(), 4), 244);
}

#[test]
fn perft_small_board() {
    assert_eq!(run_perft(Dims::new(4, 4), 1), 4);
    assert_eq!(run_perft(Dims::new(4, 4), 2), 12);
}

#[test]
fn perft_full_board_is_a_leaf() {
    // A 2x2 board is full at the start.
    assert_eq!(run_perft(Dims::new(2, 2), 5), 1);
}
