use crate::engine::config::SearchConfig;
use crate::engine::deadline::{Deadline, SearchTimeout};
use crate::engine::search::SearchContext;
use crate::engine::{Evaluator, Move, SearchStats};
use crate::logic::game::GameState;
use std::time::{Duration, Instant};

/// Runs alpha-beta at depth 1, 2, 3, ... and answers with the move from the
/// deepest pass that finished before the clock ran out.
///
/// A pass that times out is thrown away whole. Deepening also ends once a
/// pass finishes without hitting its depth limit, since the rest of the game
/// was then searched to the end, or when `config.max_depth` is reached.
pub fn iterative_deepening<S, E, F>(
    state: &S,
    evaluator: &E,
    config: &SearchConfig,
    time_left: F,
) -> (Move, SearchStats)
where
    S: GameState,
    E: Evaluator,
    F: Fn() -> Duration,
{
    let start = Instant::now();
    let deadline = Deadline::new(time_left, config.timer_threshold());
    let mut ctx = SearchContext::new(evaluator, deadline, state.active_player());

    let mut best_move = Move::NONE;
    let mut stats = SearchStats::default();
    let mut depth = 1;

    loop {
        match ctx.alphabeta(state, depth) {
            Ok((mv, score)) => {
                best_move = mv;
                stats.depth = depth;
                stats.score = score;
                log::debug!(
                    "depth {depth} complete: best {mv} score {score} nodes {}",
                    ctx.nodes()
                );

                if !ctx.reached_depth_limit() {
                    log::debug!("game tree resolved at depth {depth}");
                    break;
                }
                if config.max_depth.is_some_and(|max| depth >= max) {
                    break;
                }
                depth += 1;
            }
            Err(SearchTimeout) => {
                log::trace!("deadline hit during depth {depth}, keeping depth {}", stats.depth);
                break;
            }
        }
    }

    stats.nodes = ctx.nodes();
    stats.checks = ctx.checks();
    #[allow(clippy::cast_possible_truncation)]
    {
        stats.time_ms = start.elapsed().as_millis() as u64;
    }
    (best_move, stats)
}
