//! End-to-end checks of the rule pipeline through the public API

use caro::rules::{Direction, EndState};
use caro::{
    calculate_explosion_score, check_after_move, check_draw_with_explosion_score,
    check_explosion_win, execute_explosions, find_all_five_sequences, Board, DrawResult,
    EngineError, FiveKind, Game, MoveEvent, MoveOutcome, Player, Pos, RuleConfig, Stone,
    WinResult, WinType,
};

fn nine_by_nine_row_four(after: Option<Player>) -> Board {
    let mut board = Board::new(9).unwrap();
    for col in 0..5 {
        board.place_stone(Pos::new(4, col), Player::X);
    }
    if let Some(player) = after {
        board.place_stone(Pos::new(4, 5), player);
    }
    board
}

#[test]
fn locked_five_against_edge_and_opponent_explodes() {
    let mut board = nine_by_nine_row_four(Some(Player::O));

    let seqs = find_all_five_sequences(&board, Pos::new(4, 4), Player::X).unwrap();
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].kind(), FiveKind::LockedFive);

    let pending = match check_after_move(&board, Pos::new(4, 4), Player::X).unwrap() {
        MoveOutcome::Explosion(pending) => pending,
        other => panic!("expected explosion, got {other:?}"),
    };
    let result = execute_explosions(&mut board, pending).unwrap();

    let expected: Vec<Pos> = (0..5).map(|c| Pos::new(4, c)).collect();
    assert_eq!(result.cleared(), expected.as_slice());
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.get(Pos::new(4, 5)), Stone::O);
}

#[test]
fn same_run_with_empty_end_wins_and_board_is_untouched() {
    let board = nine_by_nine_row_four(None);
    let before = board.clone();

    match check_after_move(&board, Pos::new(4, 4), Player::X).unwrap() {
        MoveOutcome::Win(seq) => {
            assert_eq!(seq.start(), EndState::Locked);
            assert_eq!(seq.end(), EndState::Open);
        }
        other => panic!("expected win, got {other:?}"),
    }
    assert_eq!(board, before);
}

#[test]
fn friendly_stone_beyond_end_counts_as_open() {
    // X X X X X X against the left edge: the first window sees X after it
    let mut board = Board::new(9).unwrap();
    for col in 0..6 {
        board.place_stone(Pos::new(0, col), Player::X);
    }
    board.place_stone(Pos::new(0, 6), Player::O);

    let seqs = find_all_five_sequences(&board, Pos::new(0, 0), Player::X).unwrap();
    assert_eq!(seqs.len(), 2);
    assert!(seqs.iter().all(|s| s.kind() == FiveKind::OpenFive));
    assert!(check_after_move(&board, Pos::new(0, 0), Player::X).unwrap().is_win());
}

#[test]
fn every_window_has_exactly_one_classification() {
    let board: Board = "
        OXXXXXXXO
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    let seqs = find_all_five_sequences(&board, Pos::new(0, 4), Player::X).unwrap();
    assert_eq!(seqs.len(), 3);
    for seq in &seqs {
        let any_open = seq.start() == EndState::Open || seq.end() == EndState::Open;
        assert_eq!(seq.is_open(), any_open);
        assert_ne!(seq.is_open(), seq.is_locked());
        assert!(seq.cells().iter().all(|&p| board.get(p) == Stone::X));
    }
}

#[test]
fn anchor_outside_any_five_scans_empty() {
    let board: Board = "
        XXXX.....
        X........
        X.X......
        X..X.....
        .........
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    for pos in board.positions(Player::X).collect::<Vec<_>>() {
        assert!(find_all_five_sequences(&board, pos, Player::X).unwrap().is_empty());
    }
}

#[test]
fn diagonal_windows_in_scan_order() {
    // Locked down-right diagonal from corner to an O
    let board: Board = "
        X......
        .X.....
        ..X....
        ...X...
        ....X..
        .....O.
        .......
    "
    .parse()
    .unwrap();
    match check_after_move(&board, Pos::new(2, 2), Player::X).unwrap() {
        MoveOutcome::Explosion(pending) => {
            assert_eq!(pending.count(), 1);
            assert_eq!(pending.sequences()[0].direction(), Direction::DiagonalDownRight);
        }
        other => panic!("expected explosion, got {other:?}"),
    }
}

#[test]
fn scoring_contract() {
    assert_eq!(calculate_explosion_score(0), 0);
    assert_eq!(calculate_explosion_score(1), 1);
    assert_eq!(calculate_explosion_score(2), 3);
    assert_eq!(calculate_explosion_score(5), 3);

    assert_eq!(
        check_explosion_win(5, 3, 5),
        Some(WinResult {
            winner: Player::X,
            win_type: WinType::ExplosionScore
        })
    );
    assert_eq!(check_explosion_win(4, 4, 5), None);
}

#[test]
fn draw_contract() {
    let mut board: Board = "
        XXOOX
        OOXXO
        XXOOX
        OOXXO
        XXOOX
    "
    .parse()
    .unwrap();
    assert_eq!(check_draw_with_explosion_score(&board, 7, 7), DrawResult::Draw);
    assert_eq!(
        check_draw_with_explosion_score(&board, 7, 6),
        DrawResult::Tiebreak(WinResult {
            winner: Player::X,
            win_type: WinType::ExplosionTiebreaker
        })
    );

    board.remove_stone(Pos::new(0, 0));
    assert_eq!(check_draw_with_explosion_score(&board, 50, 0), DrawResult::NoDecision);
}

#[test]
fn misuse_is_reported() {
    let board = nine_by_nine_row_four(Some(Player::O));
    assert!(matches!(
        check_after_move(&board, Pos::new(4, 5), Player::X),
        Err(EngineError::AnchorMismatch { .. })
    ));
    assert!(matches!(
        find_all_five_sequences(&board, Pos::new(20, 0), Player::X),
        Err(EngineError::OutOfBounds { .. })
    ));
}

#[test]
fn session_combo_explosion_scores_three() {
    // X builds row 0 cols 0-3 and col 4 rows 1-4 around the empty corner
    // (0, 4), with O caps at (0, 5) and (5, 4)
    let mut game = Game::new(RuleConfig::with_board_size(9)).unwrap();
    let xs = [(1, 4), (2, 4), (3, 4), (4, 4), (0, 3), (0, 2), (0, 1), (0, 0)];
    let os = [(5, 4), (8, 8), (8, 6), (8, 2), (8, 0), (0, 5), (7, 7)];
    for i in 0..xs.len() {
        game.play(Pos::new(xs[i].0, xs[i].1)).unwrap();
        if let Some(&(r, c)) = os.get(i) {
            game.play(Pos::new(r, c)).unwrap();
        }
    }
    // X to play (0, 4): horizontal (0,0)-(0,4) edge + O locked,
    // vertical (0,4)-(4,4) edge + O locked
    let report = game.play(Pos::new(0, 4)).unwrap();
    match &report.event {
        MoveEvent::Exploded(result) => {
            assert_eq!(result.sequence_count(), 2);
            assert_eq!(result.cleared_count(), 9);
        }
        other => panic!("expected explosion, got {other:?}"),
    }
    assert_eq!(report.points, 3);
    assert_eq!(game.scores().get(Player::X), 3);
    assert_eq!(game.board().get(Pos::new(0, 5)), Stone::O);
    assert_eq!(game.board().get(Pos::new(5, 4)), Stone::O);
}
