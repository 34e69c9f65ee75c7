//! Shortcut strategies for the reflexive and heuristic tiers.

use super::random::RandomSource;
use crate::rules::find_winning_move;
use crate::types::{Board, CENTER, Player};
use tracing::{debug, instrument};

/// Picks a uniformly random empty cell.
pub fn random_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_indices().collect();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.pick_index(empty.len())])
}

/// Completes a line for `ai`, else blocks the first line `opponent` could complete.
fn win_or_block(board: &Board, ai: Player, opponent: Player) -> Option<usize> {
    if let Some(index) = find_winning_move(board, ai) {
        debug!(index, "Taking winning move");
        return Some(index);
    }
    let block = find_winning_move(board, opponent);
    if let Some(index) = block {
        debug!(index, "Blocking opponent");
    }
    block
}

/// Win, else block, else a random empty cell.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn reflexive_move<R: RandomSource + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<usize> {
    win_or_block(board, ai, opponent).or_else(|| random_move(board, rng))
}

/// Win, else block, else the center, else a random empty cell.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn heuristic_move<R: RandomSource + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<usize> {
    win_or_block(board, ai, opponent)
        .or_else(|| board.is_empty(CENTER).then_some(CENTER))
        .or_else(|| random_move(board, rng))
}
