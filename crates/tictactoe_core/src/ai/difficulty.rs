//! AI difficulty tiers.

use serde::{Deserialize, Serialize};

/// How hard the AI plays. Fixed for the lifetime of a session.
///
/// Parses from either the tier name or the player-facing level
/// (`easy`, `medium`, `hard`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Win if possible, else block, else random.
    #[default]
    #[serde(alias = "easy")]
    #[strum(to_string = "reflexive", serialize = "easy")]
    Reflexive,
    /// Reflexive, but takes the center before falling back to random.
    #[serde(alias = "medium")]
    #[strum(to_string = "heuristic", serialize = "medium")]
    Heuristic,
    /// Full minimax search; never loses.
    #[serde(alias = "hard")]
    #[strum(to_string = "optimal", serialize = "hard")]
    Optimal,
}

impl Difficulty {
    /// Player-facing level name.
    pub fn level(self) -> &'static str {
        match self {
            Difficulty::Reflexive => "easy",
            Difficulty::Heuristic => "medium",
            Difficulty::Optimal => "hard",
        }
    }
}
