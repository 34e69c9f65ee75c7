//! AI-versus-AI tournaments.

use serde::Serialize;
use tictactoe_core::{GameSession, Outcome, Player, ai::AiEngine, ai::Difficulty};
use tracing::{debug, info, instrument};

/// Tally of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SimulationSummary {
    /// Difficulty of the X side.
    pub x: Difficulty,
    /// Difficulty of the O side.
    pub o: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SimulationSummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "X ({}) vs O ({}), {} games",
            self.x.level(),
            self.o.level(),
            self.games
        )?;
        writeln!(f, "  X wins: {}", self.x_wins)?;
        writeln!(f, "  O wins: {}", self.o_wins)?;
        write!(f, "  Draws:  {}", self.draws)
    }
}

/// Plays one game between two engines and returns its outcome.
pub fn play_game(x: &mut AiEngine, o: &mut AiEngine) -> anyhow::Result<Outcome> {
    let mut session = GameSession::new();
    loop {
        let engine = match session.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let index = engine
            .choose_move(session.board())
            .ok_or_else(|| anyhow::anyhow!("AI found no move on an active board"))?;
        session.apply_move(index, engine.side())?;

        let outcome = session.evaluate();
        if outcome.is_terminal() {
            debug!(%outcome, board = %session.board(), "Game over");
            return Ok(outcome);
        }
    }
}

/// Plays `games` games between an X engine and an O engine.
///
/// The two sides get independent random streams derived from `seed`.
#[instrument]
pub fn simulate(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
) -> anyhow::Result<SimulationSummary> {
    let mut x_engine = AiEngine::new(Player::X, x, seed);
    let mut o_engine = AiEngine::new(Player::O, o, seed.map(|s| s.wrapping_add(1)));

    let mut summary = SimulationSummary {
        x,
        o,
        ..Default::default()
    };
    for _ in 0..games {
        summary.record(play_game(&mut x_engine, &mut o_engine)?);
    }

    info!(x_wins = summary.x_wins, o_wins = summary.o_wins, draws = summary.draws, "Simulation complete");
    Ok(summary)
}
