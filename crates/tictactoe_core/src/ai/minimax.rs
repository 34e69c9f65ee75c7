//! Exhaustive minimax search.
//!
//! Scores are from the AI's point of view: +10 when the AI has a line,
//! -10 when the opponent has one, 0 for a full board. There is no depth
//! discount, so every root score is one of those three values.
//!
//! The search mutates the board in place. Each speculative mark is owned
//! by a speculation guard which clears the cell when dropped, so the
//! board is restored on every path out of a branch.

use crate::rules::{check_win, is_full};
use crate::types::{Board, CELL_COUNT, Cell, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a position the AI has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// A searched node: the best move found (none at terminal nodes) and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Index of the chosen move.
    pub index: Option<usize>,
    /// Guaranteed score of that move under optimal play.
    pub score: i32,
}

/// A mark placed for exploration; removed again on drop.
struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index));
        board.put(index, Cell::Occupied(player));
        Self { board, index }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.put(self.index, Cell::Empty);
    }
}

/// Runs minimax from `board` with `to_move` on turn.
///
/// The AI maximizes, the opponent minimizes. Empty cells are tried in
/// ascending index order and only a strictly better score replaces the
/// current best, so ties go to the lowest index and the result is
/// deterministic. `board` is bit-for-bit identical when this returns.
pub fn minimax(board: &mut Board, to_move: Player, ai: Player, opponent: Player) -> Scored {
    let mut nodes = 0;
    search(board, to_move, ai, opponent, &mut nodes)
}

fn search(
    board: &mut Board,
    to_move: Player,
    ai: Player,
    opponent: Player,
    nodes: &mut u64,
) -> Scored {
    *nodes += 1;

    if check_win(board, opponent) {
        return Scored {
            index: None,
            score: LOSS_SCORE,
        };
    }
    if check_win(board, ai) {
        return Scored {
            index: None,
            score: WIN_SCORE,
        };
    }
    if is_full(board) {
        return Scored {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let maximizing = to_move == ai;
    let mut best: Option<Scored> = None;

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }

        let score = {
            let mut speculation = Speculation::place(board, index, to_move);
            search(&mut speculation, to_move.opponent(), ai, opponent, nodes).score
        };

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(Scored {
                index: Some(index),
                score,
            });
        }
    }

    // The board was not full, so at least one branch was explored.
    best.unwrap_or(Scored {
        index: None,
        score: DRAW_SCORE,
    })
}

/// Returns the move with the best guaranteed score for `ai`.
///
/// Reads `board` only: the search runs on a private scratch copy.
/// Returns `None` when the game is already decided or the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn optimal_move(board: &Board, ai: Player, opponent: Player) -> Option<usize> {
    if check_win(board, ai) || check_win(board, opponent) || is_full(board) {
        debug!("No move to search: game already decided");
        return None;
    }

    let mut scratch = board.clone();
    let mut nodes = 0;
    let best = search(&mut scratch, ai, ai, opponent, &mut nodes);
    debug_assert_eq!(&scratch, board, "search must restore the board");

    debug!(index = ?best.index, score = best.score, nodes, "Minimax search complete");
    best.index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let mut won = board("OOO XX. X..");
        assert_eq!(minimax(&mut won, Player::X, Player::O, Player::X).score, WIN_SCORE);

        let mut lost = board("XXX OO. O..");
        assert_eq!(minimax(&mut lost, Player::O, Player::O, Player::X).score, LOSS_SCORE);

        let mut drawn = board("XOX OXX OXO");
        assert_eq!(minimax(&mut drawn, Player::X, Player::O, Player::X).score, DRAW_SCORE);
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("OO. XX. X..");
        assert_eq!(optimal_move(&b, Player::O, Player::X), Some(2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X threatens 2; O has no win of its own.
        let b = board("XX. .O. ...");
        assert_eq!(optimal_move(&b, Player::O, Player::X), Some(2));
    }

    #[test]
    fn test_search_restores_board() {
        let original = board("X.. .O. ..X");
        let mut b = original.clone();
        let result = minimax(&mut b, Player::O, Player::O, Player::X);
        assert_eq!(b, original);
        assert!(result.index.is_some());
    }

    #[test]
    fn test_speculation_clears_cell_on_drop() {
        let mut b = Board::new();
        {
            let speculation = Speculation::place(&mut b, 4, Player::X);
            assert_eq!(speculation.get(4), Some(Cell::Occupied(Player::X)));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let b = board("XXX OO. ...");
        assert_eq!(optimal_move(&b, Player::O, Player::X), None);
    }
}
