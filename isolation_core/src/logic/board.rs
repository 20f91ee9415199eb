use crate::engine::Move;
use crate::logic::game::{GameState, Player};
use crate::logic::rules::{is_valid_move, knight_targets, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SIZE: usize = 7;

/// Isolation board.
///
/// Every cell a player lands on stays blocked for the rest of the game, so
/// the number of blank cells only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: Player::First,
            move_count: 0,
        }
    }

    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    pub const fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    fn index(&self, mv: Move) -> Option<usize> {
        if !mv.in_bounds(self.width, self.height) {
            return None;
        }
        let row = usize::try_from(mv.row).ok()?;
        let col = usize::try_from(mv.col).ok()?;
        Some(row * self.width + col)
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        self.index(mv)
            .and_then(|idx| self.blocked.get(idx))
            .is_some_and(|blocked| !blocked)
    }

    /// Blank cells in row-major order.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut cells = Vec::with_capacity(self.blank_count());
        for row in 0..self.height {
            for col in 0..self.width {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let mv = Move::new(row as i32, col as i32);
                if self.is_blank(mv) {
                    cells.push(mv);
                }
            }
        }
        cells
    }

    /// Plays `mv` for the active player after checking it is legal.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        is_valid_move(self, mv)?;
        self.move_quiet(mv);
        Ok(())
    }

    fn move_quiet(&mut self, mv: Move) {
        if let Some(cell) = self.index(mv).and_then(|idx| self.blocked.get_mut(idx)) {
            *cell = true;
        }
        if let Some(location) = self.locations.get_mut(self.active.index()) {
            *location = Some(mv);
        }
        self.active = self.active.opponent();
        self.move_count += 1;
    }
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => self.blank_cells(),
            Some(from) => knight_targets(from, self.width, self.height)
                .filter(|&mv| self.is_blank(mv))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.move_quiet(mv);
        next
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn blank_count(&self) -> usize {
        self.blocked.iter().filter(|&&blocked| !blocked).count()
    }

    fn location(&self, player: Player) -> Option<Move> {
        self.locations.get(player.index()).copied().flatten()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let mut cells = Vec::with_capacity(self.width);
            for col in 0..self.width {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let mv = Move::new(row as i32, col as i32);
                let cell = if self.location(Player::First) == Some(mv) {
                    '1'
                } else if self.location(Player::Second) == Some(mv) {
                    '2'
                } else if self.is_blank(mv) {
                    ' '
                } else {
                    '-'
                };
                cells.push(cell.to_string());
            }
            writeln!(f, " {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
