//! Status lines and end-of-game banners.

use tictactoe_core::{Board, GameMode, Outcome, Player};

/// How the end of a game should feel to the person at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Someone won (any win in two-player mode, the human in vs-AI mode).
    Win,
    /// The AI beat the human.
    Lose,
    /// Nobody won.
    Draw,
}

impl Effect {
    /// Classifies a finished game. Returns `None` while it is ongoing.
    pub fn for_outcome(outcome: &Outcome, mode: GameMode, ai_side: Player) -> Option<Self> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(Effect::Draw),
            Outcome::Win { player, .. } if mode.has_ai() && *player == ai_side => {
                Some(Effect::Lose)
            }
            Outcome::Win { .. } => Some(Effect::Win),
        }
    }

    /// Banner shown under the result line.
    pub fn banner(self) -> &'static str {
        match self {
            Effect::Win => "*** Victory! ***",
            Effect::Lose => "... Defeat ...",
            Effect::Draw => "=== Stalemate ===",
        }
    }
}

/// Status line for a session in progress.
pub fn turn_status(player: Player) -> String {
    format!("Player {} Turn", player)
}

/// Renders the board as a grid, bracketing the cells of a winning line.
pub fn render_board(board: &Board, highlight: Option<[usize; 3]>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match board.get(index).and_then(|c| c.player()) {
                    Some(player) => player.to_string(),
                    None => index.to_string(),
                };
                if highlight.is_some_and(|line| line.contains(&index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}
