use crate::engine::deadline::{Deadline, SearchTimeout};
use crate::engine::Evaluator;
use crate::logic::game::{GameState, Player};
use std::time::Duration;

/// State shared by every node of one search.
///
/// Leaves are always scored from `player`'s side, the player who asked for
/// the move, so max nodes are that player's turns and min nodes the
/// opponent's. The recursions live in `minimax` and `alphabeta`.
pub struct SearchContext<'e, E, F> {
    evaluator: &'e E,
    deadline: Deadline<F>,
    player: Player,
    limit: u32,
    nodes: u64,
    depth_cutoff: bool,
}

impl<'e, E, F> SearchContext<'e, E, F>
where
    E: Evaluator,
    F: Fn() -> Duration,
{
    pub const fn new(evaluator: &'e E, deadline: Deadline<F>, player: Player) -> Self {
        Self {
            evaluator,
            deadline,
            player,
            limit: 0,
            nodes: 0,
            depth_cutoff: false,
        }
    }

    /// Starts a new depth-bounded pass. Counters keep accumulating.
    pub(crate) fn begin(&mut self, limit: u32) {
        self.limit = limit;
        self.depth_cutoff = false;
    }

    /// First thing every node does. Nothing else runs once the clock is
    /// below the threshold.
    pub(crate) fn enter(&mut self) -> Result<(), SearchTimeout> {
        self.deadline.check()?;
        self.nodes += 1;
        Ok(())
    }

    pub(crate) fn cutoff_test<S: GameState>(&mut self, state: &S, depth: u32) -> bool {
        if state.is_terminal() {
            return true;
        }
        if depth >= self.limit {
            self.depth_cutoff = true;
            return true;
        }
        false
    }

    pub(crate) fn score<S: GameState>(&self, state: &S) -> f64 {
        self.evaluator.evaluate(state, self.player)
    }

    pub const fn player(&self) -> Player {
        self.player
    }

    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    pub const fn checks(&self) -> u64 {
        self.deadline.checks()
    }

    /// Whether the last pass stopped anywhere because of its depth limit.
    ///
    /// `false` after a completed pass means every leaf was a finished game,
    /// so searching deeper gives the same answer.
    pub const fn reached_depth_limit(&self) -> bool {
        self.depth_cutoff
    }
}
