//! Time-bounded game-tree search for Isolation.
//!
//! [`engine::select_move`] is the entry point: iterative deepening alpha-beta
//! over any [`logic::game::GameState`], polling a caller-supplied clock at
//! every node. [`logic::board::Board`] is the reference board.

pub mod engine;
pub mod logic;
