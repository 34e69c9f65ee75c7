//! Game state manager: one session owns one board.

use crate::action::Move;
use crate::error::{IllegalMoveError, IllegalMoveKind, SessionRestoreError};
use crate::invariants::assert_invariants;
use crate::rules::{self, WinCondition};
use crate::types::{Board, CELL_COUNT, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of evaluating a session after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    Ongoing,
    /// A player completed a line.
    Win {
        /// The winner.
        player: Player,
        /// Indices of the completed line, for highlighting.
        line: WinCondition,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "{} Wins!", player),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// A single game: board, player on turn and whether moves are still accepted.
///
/// Restarting means building a new session; nothing is reset in place.
///
/// Deserializing replays the recorded history on a fresh session and only
/// succeeds when that reproduces the recorded board, turn and active flag,
/// as of the last [`evaluate`](Self::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    current_player: Player,
    active: bool,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session: empty board, X to move, active.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player on turn.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while the game accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `player`'s mark at `index` and passes the turn.
    ///
    /// Does not look for a result; call [`evaluate`](Self::evaluate) next.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the session is finished, the index is
    /// out of range, the cell is occupied, or `player` is not on turn.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), IllegalMoveError> {
        if let Err(kind) = self.check_move(index, player) {
            warn!(%kind, "Rejected move");
            return Err(IllegalMoveError::new(kind));
        }

        self.board.put(index, Cell::Occupied(player));
        let mv = Move::new(player, index);
        self.history.push(mv);
        self.current_player = player.opponent();
        debug!(%mv, next = %self.current_player, "Move applied");

        assert_invariants(self);
        Ok(())
    }

    fn check_move(&self, index: usize, player: Player) -> Result<(), IllegalMoveKind> {
        if !self.active {
            return Err(IllegalMoveKind::GameOver);
        }
        match self.board.get(index) {
            None => Err(IllegalMoveKind::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(IllegalMoveKind::CellOccupied(index)),
            Some(Cell::Empty) if player != self.current_player => {
                Err(IllegalMoveKind::WrongPlayer(player))
            }
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Looks for a completed line or a full board.
    ///
    /// A win or draw deactivates the session. Evaluating a finished session
    /// again reports the same outcome.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn evaluate(&mut self) -> Outcome {
        let outcome = if let Some((player, line)) = rules::winning_line(&self.board) {
            Outcome::Win { player, line }
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };

        if outcome.is_terminal() && self.active {
            self.active = false;
            info!(%outcome, "Game finished");
        }
        outcome
    }

    /// Replays moves on a fresh session, evaluating after each one.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move, including any move after the game
    /// has been decided.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<(Self, Outcome), IllegalMoveError> {
        let mut session = Self::new();
        let mut outcome = Outcome::Ongoing;
        for mv in moves {
            session.apply_move(mv.index, mv.player)?;
            outcome = session.evaluate();
        }
        Ok((session, outcome))
    }
}

/// A session as stored, before its history has been checked.
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    current_player: Player,
    active: bool,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = SessionRestoreError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let (session, _) =
            Self::replay(&record.history).map_err(SessionRestoreError::IllegalHistory)?;
        let mismatch = if session.board != record.board {
            Some("board")
        } else if session.current_player != record.current_player {
            Some("current player")
        } else if session.active != record.active {
            Some("active flag")
        } else {
            None
        };
        if let Some(field) = mismatch {
            warn!(field, "Stored session disagrees with its history");
            return Err(SessionRestoreError::Mismatch(field));
        }
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
