//! Invariants checked after every applied move in debug builds.

use crate::session::GameSession;
use crate::types::{Cell, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X moves first and players alternate, so X leads O by zero or one mark.
pub struct MarkBalance;

impl Invariant<GameSession> for MarkBalance {
    fn holds(session: &GameSession) -> bool {
        let x_count = session.board().count(Player::X);
        let o_count = session.board().count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// The history replays to the board: same length as filled cells, each entry on its cell.
pub struct HistoryConsistent;

impl Invariant<GameSession> for HistoryConsistent {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let filled = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        let history = session.history();
        let valid = filled == history.len()
            && history
                .iter()
                .all(|mv| board.get(mv.index) == Some(Cell::Occupied(mv.player)));
        if !valid {
            warn!(filled, history_len = history.len(), "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

/// Asserts all session invariants (debug builds only).
pub fn assert_invariants(session: &GameSession) {
    debug_assert!(MarkBalance::holds(session), "{}", MarkBalance::description());
    debug_assert!(
        HistoryConsistent::holds(session),
        "{}",
        HistoryConsistent::description()
    );
}
