//! Error types for the game state manager.

use crate::types::Player;
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveKind {
    /// The session already reached a win or a draw.
    #[display("Game is already over")]
    GameOver,
    /// The index does not name a cell.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// The target cell holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// The move came from the player who is not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

/// A move the session refused to apply.
///
/// The session is left untouched when this is returned.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Illegal move: {} at {}:{}", kind, file, line)]
pub struct IllegalMoveError {
    /// What made the move illegal.
    pub kind: IllegalMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IllegalMoveError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: IllegalMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what made the move illegal.
    pub fn kind(&self) -> IllegalMoveKind {
        self.kind
    }
}

impl PartialEq for IllegalMoveError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for IllegalMoveError {}

/// A stored session that could not be trusted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionRestoreError {
    /// The recorded history contains a move the rules reject.
    #[display("Recorded history is illegal: {}", _0)]
    IllegalHistory(IllegalMoveError),
    /// Replaying the history gave a different value for the named field.
    #[display("Recorded {} does not match the replayed history", _0)]
    Mismatch(&'static str),
}

impl std::error::Error for SessionRestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionRestoreError::IllegalHistory(e) => Some(e),
            SessionRestoreError::Mismatch(_) => None,
        }
    }
}
