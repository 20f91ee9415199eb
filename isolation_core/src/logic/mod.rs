pub mod board;
pub mod game;
pub mod rules;

#[cfg(test)]
mod board_test;
