//! Board tests - placement rules, locking, line clears and scoring

use tui_blockfall::core::{try_rotate, Board, EngineError, Piece};
use tui_blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn locked_count(board: &Board) -> usize {
    board.cells().iter().flatten().count()
}

/// Fill row `y` except the listed columns.
fn fill_row_except(board: &mut Board, y: i16, holes: &[i16]) {
    for x in 0..board.width() as i16 {
        if !holes.contains(&x) {
            board.fill(x, y, PieceKind::O);
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::standard();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!((board.score(), board.lines(), board.level()), (0, 0, 1));

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_dimensions_are_validated() {
    assert!(matches!(
        Board::new(3, 20),
        Err(EngineError::InvalidDimensions { width: 3, .. })
    ));
    assert!(Board::new(10, 256).is_err());
    assert!(Board::new(4, 4).is_ok());
    assert!(Board::new(255, 255).is_ok());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::standard();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i16), None);
}

#[test]
fn test_is_valid_bounds_and_collisions() {
    let mut board = Board::standard();

    // Horizontal I on row 19 at the left wall.
    let piece = Piece::new(PieceKind::I, Rotation::North, 0, 17);
    assert!(board.is_valid(&piece));
    assert!(!board.is_valid(&piece.moved(-1, 0)));
    assert!(!board.is_valid(&piece.moved(0, 1)));
    assert!(board.is_valid(&piece.moved(6, 0)));
    assert!(!board.is_valid(&piece.moved(7, 0)));

    // Entirely above the board is fine; sideways out of bounds is not.
    let above = Piece::new(PieceKind::O, Rotation::North, 3, -5);
    assert!(board.is_valid(&above));
    assert!(board.is_valid(&above.moved(-4, 0)));
    assert!(!board.is_valid(&above.moved(-5, 0)));

    board.fill(2, 19, PieceKind::T);
    assert!(!board.is_valid(&piece));
}

#[test]
fn test_single_line_clear_scores_100_times_level() {
    let mut board = Board::standard();

    // Nine cells of row 19: two horizontal I pieces plus one cell.
    assert_eq!(board.lock(&Piece::new(PieceKind::I, Rotation::North, 0, 17)), 0);
    assert_eq!(board.lock(&Piece::new(PieceKind::I, Rotation::North, 4, 17)), 0);
    board.fill(8, 19, PieceKind::J);
    assert_eq!(locked_count(&board), 9);

    // Vertical I dropping into column 9.
    let finisher = Piece::new(PieceKind::I, Rotation::East, 7, 16);
    assert!(board.is_valid(&finisher));

    assert_eq!(board.lock(&finisher), 1);
    assert_eq!(board.score(), 100);
    assert_eq!(board.lines(), 1);
    assert_eq!(board.level(), 1);

    // The three remaining I cells shifted down one row.
    assert_eq!(locked_count(&board), 3);
    for y in 17..20 {
        assert_eq!(board.get(9, y), Some(Some(PieceKind::I)));
    }
    assert_eq!(board.clear_lines(), 0);
}

#[test]
fn test_four_line_clear_scores_800_times_level() {
    let mut board = Board::standard();

    // Reach level 2 with ten single clears.
    for _ in 0..10 {
        fill_row_except(&mut board, 19, &[]);
        assert_eq!(board.clear_lines(), 1);
    }
    // Direct clear_lines does not touch the counters; lock does.
    assert_eq!(board.lines(), 0);

    for _ in 0..10 {
        fill_row_except(&mut board, 19, &[9]);
        board.fill(9, 19, PieceKind::L);
        let score_before = board.score();
        // Locking a piece entirely above the board only triggers the clear.
        assert_eq!(board.lock(&Piece::new(PieceKind::O, Rotation::North, 0, -4)), 1);
        assert_eq!(board.score() - score_before, 100);
    }
    assert_eq!(board.lines(), 10);
    assert_eq!(board.level(), 2);

    for y in 16..20 {
        fill_row_except(&mut board, y, &[9]);
    }
    let tetris = Piece::new(PieceKind::I, Rotation::East, 7, 16);
    let score_before = board.score();

    assert_eq!(board.lock(&tetris), 4);
    assert_eq!(board.score() - score_before, 800 * 2);
    assert_eq!(board.lines(), 14);
    assert_eq!(locked_count(&board), 0);
}

#[test]
fn test_non_adjacent_rows_clear_in_one_pass() {
    let mut board = Board::standard();
    fill_row_except(&mut board, 19, &[0]);
    fill_row_except(&mut board, 17, &[0]);
    board.fill(5, 18, PieceKind::S);
    board.fill(5, 16, PieceKind::Z);

    // Vertical I in column 0 covering rows 16..=19.
    let piece = Piece::new(PieceKind::I, Rotation::West, -1, 16);
    assert_eq!(board.lock(&piece), 2);

    // Rows 16 and 18 keep their order and end up at 18 and 19.
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::I)));
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::I)));
    assert_eq!(locked_count(&board), 4);
}

#[test]
fn test_game_over_when_top_row_occupied() {
    let mut board = Board::standard();
    assert!(!board.is_game_over());

    board.fill(7, 1, PieceKind::T);
    assert!(!board.is_game_over());

    board.fill(0, 0, PieceKind::T);
    assert!(board.is_game_over());
}

#[test]
fn test_hard_drop_distance_lands_on_stack() {
    let mut board = Board::standard();
    for x in 0..10 {
        if x != 4 {
            board.fill(x, 15, PieceKind::Z);
        }
    }
    let piece = Piece::spawn(PieceKind::O, 10);
    let distance = board.hard_drop_distance(&piece);
    let landed = piece.moved(0, distance);

    assert!(board.is_valid(&landed));
    assert!(!board.is_valid(&landed.moved(0, 1)));
    // O sits on rows 13-14, just above the stack.
    assert_eq!(landed.occupied_cells()[2].1, 14);
}

#[test]
fn test_kick_prefers_one_column_left() {
    let mut board = Board::standard();
    let piece = Piece::new(PieceKind::T, Rotation::North, 4, 10);
    assert!(board.is_valid(&piece));

    // Block the in-place East placement only.
    board.fill(5, 12, PieceKind::J);

    let rotated = try_rotate(&board, &piece, 1).unwrap();
    assert_eq!(rotated, Piece::new(PieceKind::T, Rotation::East, 3, 10));
}

#[test]
fn test_o_piece_rotation_keeps_cells() {
    let board = Board::standard();
    let piece = Piece::new(PieceKind::O, Rotation::North, 3, 5);
    let rotated = try_rotate(&board, &piece, 1).unwrap();
    assert_eq!(rotated.occupied_cells(), piece.occupied_cells());
}
