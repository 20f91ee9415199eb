use crate::engine::config::SearchConfig;
use crate::logic::game::{GameState, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod deadline;
pub mod deepening;
pub mod eval;
pub mod minimax;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Forfeit: returned when the player to move has no legal move.
    pub const NONE: Self = Self { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        usize::try_from(self.row).is_ok_and(|row| row < height)
            && usize::try_from(self.col).is_ok_and(|col| col < width)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Depth of the last fully completed iteration, 0 if none completed.
    pub depth: u32,
    pub nodes: u64,
    pub checks: u64,
    pub time_ms: u64,
    /// Root value of the returned move, from the mover's point of view.
    pub score: f64,
}

/// Static evaluation of a position for one player.
///
/// Decided positions map to the signed infinities so every finite heuristic
/// value ranks between a loss and a win.
pub trait Evaluator {
    fn evaluate<S: GameState>(&self, state: &S, player: Player) -> f64;
}

/// Picks a move for the active player with iterative deepening alpha-beta.
///
/// `time_left` reports what remains of the caller's turn clock. The result is
/// `Move::NONE` only if the active player has no legal move, or if the clock
/// ran out before the first iteration finished.
pub fn select_move<S, F>(state: &S, config: &SearchConfig, time_left: F) -> Move
where
    S: GameState,
    F: Fn() -> Duration,
{
    search(state, config, time_left).0
}

/// Same as [`select_move`], also returning the search statistics.
pub fn search<S, F>(state: &S, config: &SearchConfig, time_left: F) -> (Move, SearchStats)
where
    S: GameState,
    F: Fn() -> Duration,
{
    deepening::iterative_deepening(state, &config.heuristic, config, time_left)
}
