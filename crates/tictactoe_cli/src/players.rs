//! Players that supply moves to the orchestrator.

use anyhow::Result;
use std::io::BufRead;
use std::time::Duration;
use tictactoe_core::{GameSession, Position, ai::AiEngine};
use tracing::debug;

/// What a player wants to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Place a mark at a board index.
    Place(usize),
    /// Throw the session away and start a new one.
    Restart,
    /// Leave the game.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

impl Turn {
    /// Parses one line of human input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Turn::Quit,
            "r" | "restart" => Turn::Restart,
            _ => match Position::parse(trimmed) {
                Some(pos) => Turn::Place(pos.to_index()),
                None => Turn::Unrecognized(trimmed.to_string()),
            },
        }
    }
}

/// A participant in the game.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// True for players that read from the terminal.
    fn is_human(&self) -> bool;

    /// Decides the next turn. Humans read one line from `input`.
    fn next_turn(&mut self, session: &GameSession, input: &mut dyn BufRead) -> Result<Turn>;
}

/// A human typing moves at the terminal.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn next_turn(&mut self, _session: &GameSession, input: &mut dyn BufRead) -> Result<Turn> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!(player = %self.name, "Input closed");
            return Ok(Turn::Quit);
        }
        Ok(Turn::parse(&line))
    }
}

/// The AI engine, with a short pause so its move is perceptible.
pub struct AiPlayer {
    name: String,
    engine: AiEngine,
    delay: Duration,
}

impl AiPlayer {
    /// Creates a new AI player.
    pub fn new(engine: AiEngine, delay: Duration) -> Self {
        Self {
            name: format!("AI ({})", engine.difficulty().level()),
            engine,
            delay,
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        false
    }

    fn next_turn(&mut self, session: &GameSession, _input: &mut dyn BufRead) -> Result<Turn> {
        debug!(ai = %self.name, "AI making move");

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match self.engine.choose_move(session.board()) {
            Some(index) => {
                debug!(ai = %self.name, index, "AI chose position");
                Ok(Turn::Place(index))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }
}
