use crate::engine::{Evaluator, Move};
use crate::logic::game::{GameState, Player};
use serde::{Deserialize, Serialize};

/// Selectable scoring functions.
///
/// The first three are the tuned heuristics. The rest are the simple
/// baselines the tuned ones are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Own minus opponent centrality of the reachable cells.
    #[default]
    Centrality,
    /// Move counts weighted by how full the board is.
    Pressure,
    /// Centrality weighted like `Pressure`.
    Hybrid,
    Null,
    OpenMove,
    Improved,
    Center,
}

impl Evaluator for Heuristic {
    fn evaluate<S: GameState>(&self, state: &S, player: Player) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }

        match self {
            Self::Centrality => centrality_score(state, player),
            Self::Pressure => pressure_score(state, player),
            Self::Hybrid => hybrid_score(state, player),
            Self::Null => 0.0,
            Self::OpenMove => move_count(&state.legal_moves_for(player)),
            Self::Improved => {
                move_count(&state.legal_moves_for(player))
                    - move_count(&state.legal_moves_for(player.opponent()))
            }
            Self::Center => center_score(state, player),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn move_count(moves: &[Move]) -> f64 {
    moves.len() as f64
}

/// Sum of `y(2h - y) + x(2w - x)` over `moves`.
///
/// Each term peaks at the center cell and falls off quadratically towards
/// the edges.
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
pub fn centrality<S: GameState>(state: &S, moves: &[Move]) -> f64 {
    let w = (state.width() as f64 - 1.0) / 2.0;
    let h = (state.height() as f64 - 1.0) / 2.0;

    moves
        .iter()
        .map(|mv| {
            let y = f64::from(mv.row);
            let x = f64::from(mv.col);
            y * (2.0 * h - y) + x * (2.0 * w - x)
        })
        .sum()
}

/// How hard the opponent is being squeezed, from 0.25 on an empty board up
/// to 0.75 on a full one.
#[allow(clippy::cast_precision_loss)]
pub fn pressure<S: GameState>(state: &S) -> f64 {
    let cells = (state.width() * state.height()) as f64;
    let blanks = state.blank_count() as f64;
    0.25 + (cells - blanks) / (cells * 2.0)
}

pub fn centrality_score<S: GameState>(state: &S, player: Player) -> f64 {
    let own = centrality(state, &state.legal_moves_for(player));
    let opp = centrality(state, &state.legal_moves_for(player.opponent()));
    own - opp
}

#[allow(clippy::suboptimal_flops)]
pub fn pressure_score<S: GameState>(state: &S, player: Player) -> f64 {
    let own = move_count(&state.legal_moves_for(player));
    let opp = move_count(&state.legal_moves_for(player.opponent()));
    let p = pressure(state);
    (1.0 - p) * own - p * opp
}

#[allow(clippy::suboptimal_flops)]
pub fn hybrid_score<S: GameState>(state: &S, player: Player) -> f64 {
    let own = centrality(state, &state.legal_moves_for(player));
    let opp = centrality(state, &state.legal_moves_for(player.opponent()));
    let p = pressure(state);
    (1.0 - p) * own - p * opp
}

/// Squared distance of `player` from the middle of the board.
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
pub fn center_score<S: GameState>(state: &S, player: Player) -> f64 {
    let Some(location) = state.location(player) else {
        return 0.0;
    };
    let w = state.width() as f64 / 2.0;
    let h = state.height() as f64 / 2.0;
    let dy = h - f64::from(location.row);
    let dx = w - f64::from(location.col);
    dy * dy + dx * dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Board;

    fn board(width: usize, height: usize, moves: &[(i32, i32)]) -> Board {
        let mut board = Board::new(width, height);
        for &(r, c) in moves {
            board.apply_move(Move::new(r, c)).unwrap();
        }
        board
    }

    #[test]
    fn test_symmetric_centrality_is_zero() {
        let board = board(7, 7, &[(0, 0), (6, 6)]);
        assert_eq!(Heuristic::Centrality.evaluate(&board, Player::First), 0.0);
        assert_eq!(Heuristic::Centrality.evaluate(&board, Player::Second), 0.0);
    }

    #[test]
    fn test_centrality_terms() {
        let board = board(7, 7, &[(0, 0), (6, 6)]);
        // (1, 2) and (2, 1) both score 1*5 + 2*4 = 13
        let own = centrality(&board, &board.legal_moves_for(Player::First));
        assert!((own - 26.0).abs() < 1e-9);

        // Center cell of a 7x7 board scores 3*3 + 3*3
        assert!((centrality(&board, &[Move::new(3, 3)]) - 18.0).abs() < 1e-9);
        assert!(centrality(&board, &[Move::new(0, 0)]).abs() < 1e-9);
    }

    #[test]
    fn test_centrality_prefers_the_middle() {
        // Player 1 in the middle, player 2 in a corner
        let board = board(7, 7, &[(3, 3), (0, 0)]);
        assert!(Heuristic::Centrality.evaluate(&board, Player::First) > 0.0);
        assert!(Heuristic::Centrality.evaluate(&board, Player::Second) < 0.0);
    }

    #[test]
    fn test_pressure_matches_49_cell_formula() {
        let board = board(7, 7, &[(3, 3), (0, 0)]);
        let expected = 0.25 + (49.0 - 47.0) / (49.0 * 2.0);
        assert!((pressure(&board) - expected).abs() < 1e-12);

        let empty = Board::default();
        assert!((pressure(&empty) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_pressure_stays_in_range_on_other_sizes() {
        let small = board(3, 3, &[(0, 0), (2, 2), (1, 2), (0, 1)]);
        let p = pressure(&small);
        assert!((0.25..=0.75).contains(&p));
        assert!((p - (0.25 + 4.0 / 18.0)).abs() < 1e-12);
    }

    #[test]
    fn test_pressure_score() {
        let board = board(7, 7, &[(3, 3), (0, 0)]);
        let p = 0.25 + 2.0 / 98.0;
        // 8 moves against 2
        let expected = (1.0 - p) * 8.0 - p * 2.0;
        let score = Heuristic::Pressure.evaluate(&board, Player::First);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hybrid_score() {
        let board = board(7, 7, &[(0, 0), (6, 6)]);
        let p = 0.25 + 2.0 / 98.0;
        let expected = (1.0 - p) * 26.0 - p * 26.0;
        let score = Heuristic::Hybrid.evaluate(&board, Player::First);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_decided_positions_are_infinite() {
        // Player 1 is stuck in the middle of a 3x3 board
        let board = board(3, 3, &[(1, 1), (0, 0)]);
        for heuristic in [
            Heuristic::Centrality,
            Heuristic::Pressure,
            Heuristic::Hybrid,
            Heuristic::Null,
            Heuristic::OpenMove,
            Heuristic::Improved,
            Heuristic::Center,
        ] {
            assert_eq!(heuristic.evaluate(&board, Player::First), f64::NEG_INFINITY);
            assert_eq!(heuristic.evaluate(&board, Player::Second), f64::INFINITY);
        }
    }

    #[test]
    fn test_baselines() {
        let board = board(7, 7, &[(3, 3), (0, 0)]);
        assert_eq!(Heuristic::Null.evaluate(&board, Player::First), 0.0);
        assert_eq!(Heuristic::OpenMove.evaluate(&board, Player::First), 8.0);
        assert_eq!(Heuristic::Improved.evaluate(&board, Player::First), 6.0);
        assert_eq!(Heuristic::Improved.evaluate(&board, Player::Second), -6.0);
        // (3.5 - 3)^2 + (3.5 - 3)^2
        assert!((Heuristic::Center.evaluate(&board, Player::First) - 0.5).abs() < 1e-12);
        assert!((Heuristic::Center.evaluate(&board, Player::Second) - 24.5).abs() < 1e-12);
    }

    #[test]
    fn test_center_before_placement() {
        let board = Board::default();
        assert_eq!(Heuristic::Center.evaluate(&board, Player::Second), 0.0);
    }
}
