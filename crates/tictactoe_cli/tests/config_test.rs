//! Tests for configuration loading.

use std::io::Write;
use std::time::Duration;
use tictactoe_cli::GameConfig;
use tictactoe_core::{GameMode, Player, ai::Difficulty};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
    assert_eq!(*config.difficulty(), Difficulty::Reflexive);
    assert_eq!(*config.ai_player(), Player::O);
    assert_eq!(config.ai_delay(), Duration::from_millis(400));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
mode = "vs-ai"
difficulty = "hard"
ai_player = "X"
ai_delay_ms = 0
seed = 7
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::VsAi);
    assert_eq!(*config.difficulty(), Difficulty::Optimal);
    assert_eq!(*config.ai_player(), Player::X);
    assert_eq!(*config.ai_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("difficulty = \"heuristic\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Heuristic);
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
    assert_eq!(*config.ai_delay_ms(), 400);
}

#[test]
fn test_medium_alias() {
    let file = write_config("difficulty = \"medium\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Heuristic);
}

#[test]
fn test_bad_values_rejected() {
    let file = write_config("difficulty = \"impossible\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = write_config("colour = \"blue\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_setters_override() {
    let config = GameConfig::default()
        .with_mode(GameMode::VsAi)
        .with_difficulty(Difficulty::Optimal)
        .with_seed(Some(3));
    assert_eq!(*config.mode(), GameMode::VsAi);
    assert_eq!(*config.difficulty(), Difficulty::Optimal);
    assert_eq!(*config.seed(), Some(3));
}
