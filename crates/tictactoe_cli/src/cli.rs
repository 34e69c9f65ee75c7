//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{GameMode, Player, ai::Difficulty};

/// Tic-tac-toe in the terminal, against a friend or the AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with easy, medium and hard AI opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game mode: two-player or vs-ai
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// AI difficulty: easy, medium, hard (or reflexive, heuristic, optimal)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark played by the AI
        #[arg(long)]
        ai_player: Option<Player>,

        /// Pause before each AI move, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two AIs against each other and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Difficulty of the X side
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O side
        #[arg(short, long, default_value = "easy")]
        o: Difficulty,

        /// Seed for the AIs' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
