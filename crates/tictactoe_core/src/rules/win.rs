//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Three board indices forming a line.
pub type WinCondition = [usize; 3];

/// Every winning line, in the order they are checked: rows, columns, diagonals.
pub const WIN_CONDITIONS: [WinCondition; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` holds all three cells of some line.
pub fn check_win(board: &Board, player: Player) -> bool {
    WIN_CONDITIONS
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(player))))
}

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`WIN_CONDITIONS`] order, so when a board somehow
/// holds several completed lines the earliest declared one is reported.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinCondition)> {
    WIN_CONDITIONS.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a)?;
        let player = cell.player()?;
        (board.get(b) == Some(cell) && board.get(c) == Some(cell)).then_some((player, [a, b, c]))
    })
}

/// Finds the cell that completes a line for `player`.
///
/// Returns the empty index of the first line (in [`WIN_CONDITIONS`] order)
/// where `player` already holds the other two cells. Used both to take a
/// win and, with the opponent as `player`, to find the block.
#[instrument(skip(board), fields(board = %board))]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    WIN_CONDITIONS.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&i| board.get(i) == Some(Cell::Occupied(player)))
            .count();
        if owned != 2 {
            return None;
        }
        line.iter().copied().find(|&i| board.is_empty(i))
    })
}
