use crate::engine::Move;
use crate::logic::board::Board;
use crate::logic::game::GameState;
use std::fmt;

/// Knight jumps in the order the move generator yields them.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    IllegalMove(Move),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "game is already over"),
            Self::IllegalMove(mv) => write!(f, "illegal move {mv}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Checks that `mv` is a legal move for the active player.
pub fn is_valid_move(board: &Board, mv: Move) -> Result<(), MoveError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(MoveError::GameOver);
    }
    if !moves.contains(&mv) {
        return Err(MoveError::IllegalMove(mv));
    }
    Ok(())
}

/// Knight destinations from `from` that stay on a `width` x `height` grid.
pub fn knight_targets(from: Move, width: usize, height: usize) -> impl Iterator<Item = Move> {
    KNIGHT_OFFSETS
        .iter()
        .map(move |&(dr, dc)| Move::new(from.row + dr, from.col + dc))
        .filter(move |mv| mv.in_bounds(width, height))
}
