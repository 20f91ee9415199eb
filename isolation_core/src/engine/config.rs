use crate::engine::eval::Heuristic;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which search an [`Agent`](crate::engine::agent::Agent) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain minimax to `search_depth`.
    Minimax,
    /// Alpha-beta to `search_depth`.
    AlphaBeta,
    #[default]
    IterativeDeepening,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    // Fixed-depth strategies only
    pub search_depth: u32,
    pub heuristic: Heuristic,
    /// Abort once less than this many milliseconds remain on the turn clock.
    pub timer_threshold_ms: u64,
    pub strategy: Strategy,
    /// Optional cap for iterative deepening.
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            heuristic: Heuristic::Centrality,
            timer_threshold_ms: 10,
            strategy: Strategy::IterativeDeepening,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json_str)?;
        config.search_depth = config.search_depth.max(1);
        Ok(config)
    }

    pub const fn timer_threshold(&self) -> Duration {
        Duration::from_millis(self.timer_threshold_ms)
    }

    /// `search_depth`, never below one ply.
    pub fn depth(&self) -> u32 {
        self.search_depth.max(1)
    }
}
