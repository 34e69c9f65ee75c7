//! Game modes offered at session start.

use serde::{Deserialize, Serialize};

/// Who plays the two sides.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays against the AI engine.
    VsAi,
}

impl GameMode {
    /// Returns true if the AI engine drives one side.
    pub fn has_ai(self) -> bool {
        matches!(self, GameMode::VsAi)
    }
}
