//! Tic-tac-toe - terminal play and AI tournaments.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::{GameConfig, Orchestrator, simulate};
use tictactoe_core::{GameMode, Player, ai::Difficulty};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            ai_player,
            ai_delay_ms,
            seed,
        } => run_play(config, mode, difficulty, ai_player, ai_delay_ms, seed),
        Command::Simulate {
            games,
            x,
            o,
            seed,
            json,
        } => run_simulate(games, x, o, seed, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    ai_player: Option<Player>,
    ai_delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load(config_path.as_deref())?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(ai_player) = ai_player {
        config = config.with_ai_player(ai_player);
    }
    if let Some(ai_delay_ms) = ai_delay_ms {
        config = config.with_ai_delay_ms(ai_delay_ms);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    info!(?config, "Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut orchestrator = Orchestrator::from_config(&config, stdin.lock(), stdout.lock());
    orchestrator.run()?;
    Ok(())
}

/// Run an AI-vs-AI tournament
#[instrument]
fn run_simulate(games: u32, x: Difficulty, o: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    let summary = simulate(games, x, o, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
