//! Terminal front end for `tictactoe_core`.
//!
//! - **Config**: TOML settings chosen at session start, overridable by flags
//! - **Orchestrator**: the interactive game loop (human vs human or vs AI)
//! - **Simulate**: AI-versus-AI tournaments

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod simulate;
pub mod status;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use orchestrator::Orchestrator;
pub use simulate::{SimulationSummary, play_game, simulate};
