use crate::engine::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "player 1"),
            Self::Second => write!(f, "player 2"),
        }
    }
}

/// Read-only view of a position that the search needs.
///
/// Implementors own the rules. The search only enumerates moves, forecasts
/// successors and asks about the outcome, so `forecast_move` must return an
/// independent value and never alias the receiver.
pub trait GameState: Sized {
    fn active_player(&self) -> Player;

    /// Legal destinations for `player`, in a stable order.
    ///
    /// The order decides which move wins a tie during search.
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Successor after the active player plays `mv`. Only called with a move
    /// from `legal_moves`.
    #[must_use]
    fn forecast_move(&self, mv: Move) -> Self;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn blank_count(&self) -> usize;

    /// Cell occupied by `player`, `None` before their first placement.
    fn location(&self, player: Player) -> Option<Move>;

    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// The player to act has nowhere to go.
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active_player() && self.is_terminal()
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active_player() && self.is_terminal()
    }
}
