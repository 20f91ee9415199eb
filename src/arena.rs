use isolation_core::engine::agent::Agent;
use isolation_core::engine::config::SearchConfig;
use isolation_core::engine::Move;
use isolation_core::logic::board::{Board, DEFAULT_SIZE};
use isolation_core::logic::game::{GameState, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub width: usize,
    pub height: usize,
    /// Per-move clock for each agent.
    pub time_limit_ms: u64,
    /// Seed for the random opening placements. Unset draws from entropy.
    pub seed: Option<u64>,
    pub first: SearchConfig,
    pub second: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            time_limit_ms: 150,
            seed: None,
            first: SearchConfig::default(),
            second: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    NoLegalMoves,
    Timeout,
    IllegalMove(Move),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLegalMoves => write!(f, "opponent ran out of moves"),
            Self::Timeout => write!(f, "opponent ran out of time"),
            Self::IllegalMove(mv) => write!(f, "opponent played illegal move {mv}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: Player,
    pub reason: EndReason,
    pub history: Vec<Move>,
    pub board: Board,
}

/// Plays one game. Both players are dropped on random blank cells first,
/// then the agents alternate on a real per-move clock.
pub fn play_match(config: &MatchConfig) -> MatchResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut board = Board::new(config.width, config.height);
    let mut history = Vec::new();

    for _ in 0..2 {
        let Some(&mv) = board.legal_moves().choose(&mut rng) else {
            break;
        };
        if board.apply_move(mv).is_ok() {
            tracing::debug!(player = %board.inactive_player(), mv = %mv, "random opening");
            history.push(mv);
        }
    }

    let first = Agent::new(config.first.clone());
    let second = Agent::new(config.second.clone());
    let limit = Duration::from_millis(config.time_limit_ms);

    loop {
        let player = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            return finish(board, history, player.opponent(), EndReason::NoLegalMoves);
        }

        let agent = match player {
            Player::First => &first,
            Player::Second => &second,
        };
        let start = Instant::now();
        let (mv, stats) = agent.search(&board, || limit.saturating_sub(start.elapsed()));
        let elapsed = start.elapsed();

        if elapsed > limit {
            tracing::warn!(player = %player, elapsed = ?elapsed, "turn clock expired");
            return finish(board, history, player.opponent(), EndReason::Timeout);
        }
        if board.apply_move(mv).is_err() {
            tracing::warn!(player = %player, mv = %mv, "illegal move");
            return finish(board, history, player.opponent(), EndReason::IllegalMove(mv));
        }

        tracing::info!(
            player = %player,
            mv = %mv,
            depth = stats.depth,
            nodes = stats.nodes,
            time_ms = stats.time_ms,
            "move played"
        );
        history.push(mv);
    }
}

fn finish(board: Board, history: Vec<Move>, winner: Player, reason: EndReason) -> MatchResult {
    tracing::info!(winner = %winner, reason = %reason, moves = history.len(), "game over");
    MatchResult {
        winner,
        reason,
        history,
        board,
    }
}
