//! Tic-tac-toe game core.
//!
//! Two pieces, both pure in-memory logic:
//!
//! - **Game state manager** ([`GameSession`]): owns the board, the player on
//!   turn and the active flag; applies moves and detects wins and draws.
//! - **AI strategy engine** ([`ai`]): picks a move for the AI side at one of
//!   three difficulties, up to a full minimax search.
//!
//! Rendering and input belong to the caller, which feeds moves in and
//! reacts to the returned [`Outcome`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Outcome, Player, ai::{Difficulty, compute_ai_move, rng_from_seed}};
//!
//! let mut session = GameSession::new();
//! session.apply_move(0, Player::X).unwrap();
//! assert_eq!(session.evaluate(), Outcome::Ongoing);
//!
//! let mut rng = rng_from_seed(Some(1));
//! let reply = compute_ai_move(session.board(), Player::O, Player::X, Difficulty::Optimal, &mut rng)
//!     .expect("board has empty cells");
//! session.apply_move(reply, Player::O).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod rules;

mod action;
mod error;
mod invariants;
mod mode;
mod position;
mod session;
mod types;

pub use action::Move;
pub use error::{IllegalMoveError, IllegalMoveKind, SessionRestoreError};
pub use invariants::{HistoryConsistent, Invariant, MarkBalance};
pub use mode::GameMode;
pub use position::Position;
pub use session::{GameSession, Outcome};
pub use types::{Board, BoardParseError, CELL_COUNT, CENTER, Cell, Player};
