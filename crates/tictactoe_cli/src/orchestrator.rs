//! Game loop between two players.
//!
//! The orchestrator is the only writer of the session: it asks the player on
//! turn for a move, applies it, evaluates, and renders the result. AI moves
//! happen on the same thread right after the human's.

use crate::config::GameConfig;
use crate::players::{AiPlayer, HumanPlayer, Player, Turn};
use crate::status::{Effect, render_board, turn_status};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{GameMode, GameSession, Outcome, Player as Mark, ai::AiEngine};
use tracing::{debug, info, instrument, warn};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished(Outcome),
    Restarted,
    Quit,
}

/// Orchestrates gameplay between two players over a terminal.
pub struct Orchestrator<I, W> {
    session: GameSession,
    mode: GameMode,
    ai_side: Mark,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Orchestrator<I, W> {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        mode: GameMode,
        ai_side: Mark,
        input: I,
        output: W,
    ) -> Self {
        Self {
            session: GameSession::new(),
            mode,
            ai_side,
            player_x,
            player_o,
            input,
            output,
        }
    }

    /// Builds the players described by `config`.
    #[instrument(skip(input, output))]
    pub fn from_config(config: &GameConfig, input: I, output: W) -> Self {
        let ai_side = *config.ai_player();
        let make = |side: Mark| -> Box<dyn Player> {
            if config.mode().has_ai() && side == ai_side {
                let engine = AiEngine::new(side, *config.difficulty(), *config.seed());
                Box::new(AiPlayer::new(engine, config.ai_delay()))
            } else {
                Box::new(HumanPlayer::new(format!("Player {}", side)))
            }
        };
        let player_x = make(Mark::X);
        let player_o = make(Mark::O);
        Self::new(player_x, player_o, *config.mode(), ai_side, input, output)
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs games until a player quits. Returns the outcome of every finished game.
    pub fn run(&mut self) -> Result<Vec<Outcome>> {
        info!(mode = %self.mode, "Starting game orchestration");
        let mut finished = Vec::new();

        loop {
            match self.play_one()? {
                GameEnd::Finished(outcome) => {
                    finished.push(outcome);
                    if !self.ask_restart()? {
                        break;
                    }
                }
                GameEnd::Restarted => {}
                GameEnd::Quit => break,
            }
            self.restart();
        }

        info!(games = finished.len(), "Leaving game");
        Ok(finished)
    }

    /// Replaces the session with a fresh one.
    pub fn restart(&mut self) {
        debug!("Restarting session");
        self.session = GameSession::new();
    }

    fn play_one(&mut self) -> Result<GameEnd> {
        loop {
            let current = self.session.current_player();
            writeln!(self.output, "\n{}", render_board(self.session.board(), None))?;
            writeln!(self.output, "{}", turn_status(current))?;

            let player = match current {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            if player.is_human() {
                write!(self.output, "> ")?;
                self.output.flush()?;
            } else {
                writeln!(self.output, "{} is thinking...", player.name())?;
            }

            let index = match player.next_turn(&self.session, &mut self.input)? {
                Turn::Place(index) => index,
                Turn::Restart => return Ok(GameEnd::Restarted),
                Turn::Quit => return Ok(GameEnd::Quit),
                Turn::Unrecognized(text) => {
                    writeln!(
                        self.output,
                        "Unrecognized input {:?}: enter 0-8 or a position like 'center', 'restart' or 'quit'",
                        text
                    )?;
                    continue;
                }
            };

            if let Err(e) = self.session.apply_move(index, current) {
                warn!(error = %e, "Move rejected");
                writeln!(self.output, "{}", e.kind())?;
                continue;
            }

            let outcome = self.session.evaluate();
            if outcome.is_terminal() {
                self.announce(&outcome)?;
                return Ok(GameEnd::Finished(outcome));
            }
        }
    }

    fn announce(&mut self, outcome: &Outcome) -> Result<()> {
        let highlight = match outcome {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Ongoing | Outcome::Draw => None,
        };
        writeln!(self.output, "\n{}", render_board(self.session.board(), highlight))?;
        writeln!(self.output, "{}", outcome)?;
        if let Some(effect) = Effect::for_outcome(outcome, self.mode, self.ai_side) {
            writeln!(self.output, "{}", effect.banner())?;
        }
        Ok(())
    }

    fn ask_restart(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Type 'restart' to play again or 'quit' to exit\n> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match Turn::parse(&line) {
                Turn::Restart => return Ok(true),
                Turn::Quit => return Ok(false),
                Turn::Place(_) | Turn::Unrecognized(_) => {}
            }
        }
    }
}
