use crate::engine::Move;
use crate::logic::board::Board;
use crate::logic::game::{GameState, Player};
use crate::logic::rules::MoveError;

fn play(board: &mut Board, moves: &[(i32, i32)]) {
    for &(r, c) in moves {
        board.apply_move(Move::new(r, c)).unwrap();
    }
}

#[test]
fn test_unplaced_player_can_go_anywhere() {
    let board = Board::new(3, 2);
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 6);
    // Row-major order
    assert_eq!(moves[0], Move::new(0, 0));
    assert_eq!(moves[1], Move::new(0, 1));
    assert_eq!(moves[3], Move::new(1, 0));
    assert_eq!(board.active_player(), Player::First);
}

#[test]
fn test_knight_moves_in_generator_order() {
    let mut board = Board::default();
    play(&mut board, &[(3, 3), (0, 0)]);

    let moves = board.legal_moves();
    let expected: Vec<Move> = [
        (1, 2),
        (1, 4),
        (2, 1),
        (2, 5),
        (4, 1),
        (4, 5),
        (5, 2),
        (5, 4),
    ]
    .iter()
    .map(|&(r, c)| Move::new(r, c))
    .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_corner_moves_stay_on_board() {
    let mut board = Board::new(3, 3);
    play(&mut board, &[(0, 0), (2, 2)]);

    assert_eq!(board.legal_moves(), vec![Move::new(1, 2), Move::new(2, 1)]);
    assert_eq!(
        board.legal_moves_for(Player::Second),
        vec![Move::new(0, 1), Move::new(1, 0)]
    );
}

#[test]
fn test_visited_cells_are_blocked() {
    let mut board = Board::new(3, 3);
    play(&mut board, &[(0, 0), (2, 2), (1, 2), (0, 1)]);

    assert!(!board.is_blank(Move::new(0, 0)));
    assert!(!board.is_blank(Move::new(0, 1)));
    assert_eq!(board.blank_count(), 5);
    // (0, 0) is behind player 1 now, only (2, 0) remains
    assert_eq!(board.legal_moves(), vec![Move::new(2, 0)]);
    assert_eq!(board.location(Player::First), Some(Move::new(1, 2)));
    assert_eq!(board.move_count(), 4);
}

#[test]
fn test_center_of_3x3_is_a_dead_end() {
    let mut board = Board::new(3, 3);
    play(&mut board, &[(1, 1), (0, 0)]);

    assert!(board.is_terminal());
    assert!(board.is_loser(Player::First));
    assert!(board.is_winner(Player::Second));
    assert!(!board.is_winner(Player::First));
}

#[test]
fn test_illegal_moves_are_rejected() {
    let mut board = Board::new(3, 3);
    play(&mut board, &[(0, 0), (2, 2)]);

    assert_eq!(
        board.apply_move(Move::new(1, 1)),
        Err(MoveError::IllegalMove(Move::new(1, 1)))
    );
    assert_eq!(
        board.apply_move(Move::NONE),
        Err(MoveError::IllegalMove(Move::NONE))
    );
    // Rejected moves leave the board untouched
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.active_player(), Player::First);

    let mut lost = Board::new(3, 3);
    play(&mut lost, &[(1, 1), (0, 0)]);
    assert_eq!(lost.apply_move(Move::new(2, 2)), Err(MoveError::GameOver));
}

#[test]
fn test_forecast_leaves_source_board_untouched() {
    let mut board = Board::new(5, 5);
    play(&mut board, &[(2, 2), (0, 0)]);
    let before = board.clone();

    let next = board.forecast_move(Move::new(0, 1));
    assert_eq!(board, before);
    assert_eq!(next.active_player(), Player::Second);
    assert_eq!(next.location(Player::First), Some(Move::new(0, 1)));
    assert_eq!(next.blank_count(), board.blank_count() - 1);
}

#[test]
fn test_display() {
    let mut board = Board::new(3, 3);
    play(&mut board, &[(0, 0), (2, 2), (1, 2)]);

    let expected = " - |   |   |\n   |   | 1 |\n   |   | 2 |\n";
    assert_eq!(board.to_string(), expected);
}
