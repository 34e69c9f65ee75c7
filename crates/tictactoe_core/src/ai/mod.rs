//! AI strategy engine.
//!
//! Three tiers choose a move for the AI side from a board snapshot:
//!
//! - [`Difficulty::Reflexive`]: win, block, random
//! - [`Difficulty::Heuristic`]: win, block, center, random
//! - [`Difficulty::Optimal`]: exhaustive [`minimax`]
//!
//! Every tier takes the AI and opponent marks as arguments; neither side is
//! assumed to be `X` or `O`. The board is only read. Each function returns
//! `None` when there is nothing to choose (full or already decided board);
//! the session never asks in that state.

mod difficulty;
mod minimax;
mod random;
mod tiers;

pub use difficulty::Difficulty;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, Scored, WIN_SCORE, minimax, optimal_move};
pub use random::{RandomSource, rng_from_seed};
pub use tiers::{heuristic_move, random_move, reflexive_move};

use crate::types::{Board, Player};
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Computes the AI's move at the given difficulty.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn compute_ai_move<R: RandomSource + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    debug_assert_ne!(ai, opponent, "AI and opponent must differ");
    let index = match difficulty {
        Difficulty::Reflexive => reflexive_move(board, ai, opponent, rng),
        Difficulty::Heuristic => heuristic_move(board, ai, opponent, rng),
        Difficulty::Optimal => optimal_move(board, ai, opponent),
    };
    debug!(?index, "AI chose move");
    index
}

/// An AI opponent bound to one side, one difficulty and one random source.
///
/// A presentation layer keeps one engine per session.
#[derive(Debug, Clone)]
pub struct AiEngine<R = StdRng> {
    side: Player,
    difficulty: Difficulty,
    rng: R,
}

impl AiEngine<StdRng> {
    /// Creates an engine; `seed` makes the random fallback reproducible.
    #[instrument]
    pub fn new(side: Player, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self::with_rng(side, difficulty, rng_from_seed(seed))
    }
}

impl<R: RandomSource> AiEngine<R> {
    /// Creates an engine with a caller-supplied random source.
    pub fn with_rng(side: Player, difficulty: Difficulty, rng: R) -> Self {
        Self {
            side,
            difficulty,
            rng,
        }
    }

    /// The mark this engine plays.
    pub fn side(&self) -> Player {
        self.side
    }

    /// The difficulty this engine plays at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a move for this engine's side.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        compute_ai_move(
            board,
            self.side,
            self.side.opponent(),
            self.difficulty,
            &mut self.rng,
        )
    }
}
