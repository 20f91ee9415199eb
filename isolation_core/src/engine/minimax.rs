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
    /// Depth-limited minimax without pruning.
    ///
    /// Returns the best root move with its value, or `Move::NONE` if the
    /// active player has no legal move. Ties go to the first move generated.
    pub fn minimax<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<(Move, f64), SearchTimeout> {
        self.begin(depth);
        let (value, mv) = self.minimax_max(state, 0)?;
        Ok((mv, value))
    }

    /// Minimax value of every root move, in generation order.
    pub fn root_scores<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<Vec<(Move, f64)>, SearchTimeout> {
        self.begin(depth);
        self.enter()?;

        let moves = state.legal_moves();
        let mut scores = Vec::with_capacity(moves.len());
        for mv in moves {
            let value = self.minimax_min(&state.forecast_move(mv), 1)?;
            scores.push((mv, value));
        }
        Ok(scores)
    }

    // The root is a max node that also remembers which move produced the value.
    fn minimax_max<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<(f64, Move), SearchTimeout> {
        self.enter()?;

        if depth > 0 && self.cutoff_test(state, depth) {
            return Ok((self.score(state), Move::NONE));
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = Move::NONE;
        for mv in state.legal_moves() {
            let value = self.minimax_min(&state.forecast_move(mv), depth + 1)?;
            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = mv;
            }
        }
        Ok((best_value, best_move))
    }

    fn minimax_min<S: GameState>(&mut self, state: &S, depth: u32) -> Result<f64, SearchTimeout> {
        self.enter()?;

        if self.cutoff_test(state, depth) {
            return Ok(self.score(state));
        }

        let mut value = f64::INFINITY;
        for mv in state.legal_moves() {
            let (child, _) = self.minimax_max(&state.forecast_move(mv), depth + 1)?;
            value = value.min(child);
        }
        Ok(value)
    }
}
