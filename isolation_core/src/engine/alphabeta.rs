use crate::engine::deadline::SearchTimeout;
use crate::engine::search::SearchContext;
use crate::engine::{Evaluator, Move};
use crate::logic::game::GameState;
use std::time::Duration;

impl<E, F> SearchContext<'_, E, F>
where
    E: Evaluator,
    F: Fn() -> Duration,
{
    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Picks a move of the same value as [`SearchContext::minimax`] at the
    /// same depth while visiting no more nodes.
    pub fn alphabeta<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<(Move, f64), SearchTimeout> {
        self.begin(depth);
        let (value, mv) = self.alphabeta_max(state, 0, f64::NEG_INFINITY, f64::INFINITY)?;
        Ok((mv, value))
    }

    fn alphabeta_max<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Result<(f64, Move), SearchTimeout> {
        self.enter()?;

        if depth > 0 && self.cutoff_test(state, depth) {
            return Ok((self.score(state), Move::NONE));
        }

        let mut value = f64::NEG_INFINITY;
        let mut best_move = Move::NONE;
        for mv in state.legal_moves() {
            let child = self.alphabeta_min(&state.forecast_move(mv), depth + 1, alpha, beta)?;
            if best_move.is_none() || child > value {
                value = child;
                best_move = mv;
            }
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        Ok((value, best_move))
    }

    fn alphabeta_min<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchTimeout> {
        self.enter()?;

        if self.cutoff_test(state, depth) {
            return Ok(self.score(state));
        }

        let mut value = f64::INFINITY;
        for mv in state.legal_moves() {
            let (child, _) = self.alphabeta_max(&state.forecast_move(mv), depth + 1, alpha, beta)?;
            value = value.min(child);
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}
