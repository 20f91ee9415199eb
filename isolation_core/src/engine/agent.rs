use crate::engine::config::{SearchConfig, Strategy};
use crate::engine::deadline::{Deadline, SearchTimeout};
use crate::engine::deepening::iterative_deepening;
use crate::engine::search::SearchContext;
use crate::engine::{Move, SearchStats};
use crate::logic::game::GameState;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// A player that picks moves with the search named in its config.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    config: SearchConfig,
}

impl Agent {
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn get_move<S, F>(&self, state: &S, time_left: F) -> Move
    where
        S: GameState,
        F: Fn() -> Duration,
    {
        self.search(state, time_left).0
    }

    /// Fixed-depth strategies have no earlier result to fall back on, so a
    /// timeout there forfeits with `Move::NONE`.
    pub fn search<S, F>(&self, state: &S, time_left: F) -> (Move, SearchStats)
    where
        S: GameState,
        F: Fn() -> Duration,
    {
        let config = &self.config;
        match config.strategy {
            Strategy::IterativeDeepening => {
                iterative_deepening(state, &config.heuristic, config, time_left)
            }
            Strategy::Minimax => fixed_depth(state, config, time_left, false),
            Strategy::AlphaBeta => fixed_depth(state, config, time_left, true),
            Strategy::Random => {
                let mv = state
                    .legal_moves()
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(Move::NONE);
                (mv, SearchStats::default())
            }
        }
    }
}

fn fixed_depth<S, F>(
    state: &S,
    config: &SearchConfig,
    time_left: F,
    prune: bool,
) -> (Move, SearchStats)
where
    S: GameState,
    F: Fn() -> Duration,
{
    let start = Instant::now();
    let deadline = Deadline::new(time_left, config.timer_threshold());
    let mut ctx = SearchContext::new(&config.heuristic, deadline, state.active_player());
    let depth = config.depth();

    let mut stats = SearchStats::default();
    let result = if prune {
        ctx.alphabeta(state, depth)
    } else {
        ctx.minimax(state, depth)
    };
    let mv = match result {
        Ok((mv, score)) => {
            stats.depth = depth;
            stats.score = score;
            mv
        }
        Err(SearchTimeout) => {
            log::debug!("fixed-depth {:?} search timed out at depth {depth}", config.strategy);
            Move::NONE
        }
    };

    stats.nodes = ctx.nodes();
    stats.checks = ctx.checks();
    #[allow(clippy::cast_possible_truncation)]
    {
        stats.time_ms = start.elapsed().as_millis() as u64;
    }
    (mv, stats)
}
