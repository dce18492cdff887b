use super::*;
use crate::error::EngineError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_stone_owner() {
    assert_eq!(Stone::X.owner(), Some(Player::X));
    assert_eq!(Stone::O.owner(), Some(Player::O));
    assert_eq!(Stone::Empty.owner(), None);
    assert_eq!(Stone::from(Player::O), Stone::O);
    assert!(Stone::X.is_owned_by(Player::X));
    assert!(!Stone::Empty.is_owned_by(Player::X));
}

#[test]
fn test_board_size_range() {
    assert!(Board::new(MIN_BOARD_SIZE).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
    assert_eq!(Board::new(4), Err(EngineError::BoardSize { size: 4 }));
    assert_eq!(Board::new(27), Err(EngineError::BoardSize { size: 27 }));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(9).unwrap();
    let pos = Pos::new(4, 4);
    assert!(board.is_empty(pos));

    board.place_stone(pos, Player::X);
    assert_eq!(board.get(pos), Stone::X);
    assert_eq!(board.stone_count(), 1);

    // Overwrite keeps the bitboards disjoint
    board.place_stone(pos, Player::O);
    assert_eq!(board.get(pos), Stone::O);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_generation_bumps_on_mutation() {
    let mut board = Board::new(9).unwrap();
    assert_eq!(board.generation(), 0);
    board.place_stone(Pos::new(0, 0), Player::X);
    board.remove_stone(Pos::new(0, 0));
    assert_eq!(board.generation(), 2);

    let copy = board.clone();
    assert_eq!(copy.generation(), board.generation());
}

#[test]
fn test_stone_at_off_board() {
    let mut board = Board::new(9).unwrap();
    board.place_stone(Pos::new(8, 8), Player::O);
    assert_eq!(board.stone_at(8, 8), Some(Stone::O));
    assert_eq!(board.stone_at(0, 0), Some(Stone::Empty));
    assert_eq!(board.stone_at(-1, 0), None);
    assert_eq!(board.stone_at(0, 9), None);
    assert_eq!(board.stone_at(9, 9), None);
}

#[test]
fn test_check_pos() {
    let board = Board::new(9).unwrap();
    assert!(board.check_pos(Pos::new(8, 8)).is_ok());
    assert_eq!(
        board.check_pos(Pos::new(9, 0)),
        Err(EngineError::OutOfBounds { row: 9, col: 0, size: 9 })
    );
}

#[test]
fn test_checked_access_off_board() {
    let mut board = Board::new(9).unwrap();
    board.place_stone(Pos::new(1, 0), Player::X);

    // (0, 9) would alias (1, 0) without the bounds check
    assert_eq!(
        board.try_get(Pos::new(0, 9)),
        Err(EngineError::OutOfBounds { row: 0, col: 9, size: 9 })
    );
    assert_eq!(board.try_get(Pos::new(1, 0)), Ok(Stone::X));

    let generation = board.generation();
    assert!(matches!(
        board.try_place_stone(Pos::new(20, 0), Player::X),
        Err(EngineError::OutOfBounds { .. })
    ));
    assert!(matches!(
        board.try_remove_stone(Pos::new(1, 9)),
        Err(EngineError::OutOfBounds { .. })
    ));
    assert_eq!(board.generation(), generation);
    assert_eq!(board.stone_count(), 1);

    board.try_place_stone(Pos::new(8, 8), Player::O).unwrap();
    board.try_remove_stone(Pos::new(1, 0)).unwrap();
    assert_eq!(board.get(Pos::new(8, 8)), Stone::O);
    assert!(board.is_empty(Pos::new(1, 0)));
}

#[test]
#[should_panic(expected = "outside a 9x9 board")]
fn test_get_off_board_panics() {
    let mut board = Board::new(9).unwrap();
    board.place_stone(Pos::new(1, 0), Player::X);
    board.get(Pos::new(0, 9));
}

#[test]
#[should_panic(expected = "outside a 9x9 board")]
fn test_place_off_board_panics() {
    let mut board = Board::new(9).unwrap();
    board.place_stone(Pos::new(20, 0), Player::X);
}

#[test]
fn test_full_board() {
    let mut board = Board::new(5).unwrap();
    assert_eq!(board.empty_count(), 25);
    for row in 0..5u8 {
        for col in 0..5u8 {
            let player = if (row + col) % 2 == 0 { Player::X } else { Player::O };
            board.place_stone(Pos::new(row, col), player);
        }
    }
    assert!(board.is_full());
    board.remove_stone(Pos::new(2, 2));
    assert!(!board.is_full());
    assert_eq!(board.empty_count(), 1);
}

#[test]
fn test_positions_row_major() {
    let mut board = Board::new(9).unwrap();
    board.place_stone(Pos::new(5, 1), Player::X);
    board.place_stone(Pos::new(0, 7), Player::X);
    board.place_stone(Pos::new(3, 3), Player::O);
    let xs: Vec<Pos> = board.positions(Player::X).collect();
    assert_eq!(xs, vec![Pos::new(0, 7), Pos::new(5, 1)]);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 8) < Pos::new(1, 0));
}

#[test]
fn test_parse_and_display() {
    let text = "
        X....
        .O...
        .....
        ...X.
        ....O
    ";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.get(Pos::new(0, 0)), Stone::X);
    assert_eq!(board.get(Pos::new(1, 1)), Stone::O);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::O);
    assert_eq!(board.stone_count(), 4);
    assert_eq!(board.to_string(), "X....\n.O...\n.....\n...X.\n....O\n");
}

#[test]
fn test_parse_rejects_ragged_rows() {
    let err = "X....\n.....\n...\n.....\n.....".parse::<Board>().unwrap_err();
    assert!(matches!(err, EngineError::Parse(_)));

    let err = "X...?\n.....\n.....\n.....\n.....".parse::<Board>().unwrap_err();
    assert!(matches!(err, EngineError::Parse(_)));
}
