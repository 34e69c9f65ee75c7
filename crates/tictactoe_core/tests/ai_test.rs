//! Tests for the AI strategy engine.

use tictactoe_core::ai::{
    AiEngine, DRAW_SCORE, Difficulty, LOSS_SCORE, WIN_SCORE, compute_ai_move, minimax,
    optimal_move, rng_from_seed,
};
use tictactoe_core::rules::find_winning_move;
use tictactoe_core::{Board, GameSession, Outcome, Player};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Plays every opponent continuation against the optimal AI and fails on any loss.
fn assert_optimal_never_loses(session: &GameSession, ai: Player) -> usize {
    if session.current_player() == ai {
        let mut session = session.clone();
        let index = optimal_move(session.board(), ai, ai.opponent()).unwrap();
        session.apply_move(index, ai).unwrap();
        return match session.evaluate() {
            Outcome::Win { player, .. } => {
                assert_eq!(player, ai);
                1
            }
            Outcome::Draw => 1,
            Outcome::Ongoing => assert_optimal_never_loses(&session, ai),
        };
    }

    let mut games = 0;
    let empty: Vec<usize> = session.board().empty_indices().collect();
    for index in empty {
        let mut branch = session.clone();
        branch.apply_move(index, ai.opponent()).unwrap();
        games += match branch.evaluate() {
            Outcome::Win { player, line } => {
                panic!("{player} beat the optimal AI on {line:?}: {}", branch.board())
            }
            Outcome::Draw => 1,
            Outcome::Ongoing => assert_optimal_never_loses(&branch, ai),
        };
    }
    games
}

#[test]
fn test_optimal_never_loses_as_second_player() {
    let games = assert_optimal_never_loses(&GameSession::new(), Player::O);
    assert!(games > 0);
}

#[test]
fn test_optimal_never_loses_as_first_player() {
    let games = assert_optimal_never_loses(&GameSession::new(), Player::X);
    assert!(games > 0);
}

#[test]
fn test_empty_board_picks_first_index_on_tie() {
    // Every opening draws under perfect play, so the first empty cell wins the tie.
    assert_eq!(optimal_move(&Board::new(), Player::O, Player::X), Some(0));
    assert_eq!(optimal_move(&Board::new(), Player::X, Player::O), Some(0));
}

#[test]
fn test_block_candidate_found() {
    let b = board("XX. .O. ...");
    assert_eq!(find_winning_move(&b, Player::X), Some(2));
    assert_eq!(optimal_move(&b, Player::O, Player::X), Some(2));
}

#[test]
fn test_last_empty_cell_is_chosen() {
    // X O X / X O O / O X _ : no line is one move from completion.
    let b = board("XOX XOO OX.");
    assert_eq!(find_winning_move(&b, Player::X), None);
    assert_eq!(find_winning_move(&b, Player::O), None);
    assert_eq!(optimal_move(&b, Player::X, Player::O), Some(8));
    assert_eq!(optimal_move(&b, Player::O, Player::X), Some(8));
}

#[test]
fn test_optimal_move_is_deterministic() {
    for s in ["X.. ... ...", "X.. .O. ..X", ".X. ... ...", "XO. ... ..."] {
        let b = board(s);
        let first = optimal_move(&b, Player::O, Player::X);
        let second = optimal_move(&b, Player::O, Player::X);
        assert_eq!(first, second, "board {s}");
        assert!(first.is_some());
    }
}

#[test]
fn test_optimal_move_leaves_board_untouched() {
    let b = board("X.. .O. ..X");
    let snapshot = b.clone();
    let _ = optimal_move(&b, Player::O, Player::X);
    assert_eq!(b, snapshot);
}

#[test]
fn test_minimax_restores_board_and_scores_are_bounded() {
    // Every position after three plies from the empty board.
    for a in 0..9 {
        for b in (0..9).filter(|&b| b != a) {
            for c in (0..9).filter(|&c| c != a && c != b) {
                let mut session = GameSession::new();
                session.apply_move(a, Player::X).unwrap();
                session.apply_move(b, Player::O).unwrap();
                session.apply_move(c, Player::X).unwrap();

                let mut scratch = session.board().clone();
                let result = minimax(&mut scratch, Player::O, Player::O, Player::X);
                assert_eq!(&scratch, session.board());
                assert!(
                    [LOSS_SCORE, DRAW_SCORE, WIN_SCORE].contains(&result.score),
                    "score {} out of range",
                    result.score
                );
            }
        }
    }
}

#[test]
fn test_minimax_sees_forced_loss() {
    // X threatens both 2 and 6 and O has no line of its own to finish.
    let mut b = board("XX. XO. ..O");
    let result = minimax(&mut b, Player::O, Player::O, Player::X);
    assert_eq!(result.score, LOSS_SCORE);
    // With every reply losing, the first empty cell is kept.
    assert_eq!(result.index, Some(2));
}

#[test]
fn test_minimax_sees_forced_win() {
    let mut b = board("OO. XX. X..");
    let result = minimax(&mut b, Player::O, Player::O, Player::X);
    assert_eq!(result, tictactoe_core::ai::Scored { index: Some(2), score: WIN_SCORE });
}

#[test]
fn test_optimal_vs_optimal_is_draw() {
    let mut session = GameSession::new();
    let mut x = AiEngine::new(Player::X, Difficulty::Optimal, None);
    let mut o = AiEngine::new(Player::O, Difficulty::Optimal, None);
    let outcome = loop {
        let engine = if session.current_player() == Player::X {
            &mut x
        } else {
            &mut o
        };
        let index = engine.choose_move(session.board()).unwrap();
        session.apply_move(index, engine.side()).unwrap();
        let outcome = session.evaluate();
        if outcome.is_terminal() {
            break outcome;
        }
    };
    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn test_compute_ai_move_dispatches_by_difficulty() {
    let mut rng = rng_from_seed(Some(5));
    let b = board("X.. ... ...");
    assert_eq!(
        compute_ai_move(&b, Player::O, Player::X, Difficulty::Heuristic, &mut rng),
        Some(4)
    );
    assert_eq!(
        compute_ai_move(&b, Player::O, Player::X, Difficulty::Optimal, &mut rng),
        optimal_move(&b, Player::O, Player::X)
    );
    let easy = compute_ai_move(&b, Player::O, Player::X, Difficulty::Reflexive, &mut rng).unwrap();
    assert!(b.is_empty(easy));
}

#[test]
fn test_full_board_yields_no_move() {
    let b = board("XOX OXX OXO");
    let mut rng = rng_from_seed(Some(1));
    for difficulty in [Difficulty::Reflexive, Difficulty::Heuristic, Difficulty::Optimal] {
        assert_eq!(compute_ai_move(&b, Player::O, Player::X, difficulty, &mut rng), None);
    }
}

#[test]
fn test_seeded_engines_agree() {
    let b = board("X.. .O. ..X");
    let mut a = AiEngine::new(Player::O, Difficulty::Reflexive, Some(77));
    let mut c = AiEngine::new(Player::O, Difficulty::Reflexive, Some(77));
    for _ in 0..10 {
        assert_eq!(a.choose_move(&b), c.choose_move(&b));
    }
}
