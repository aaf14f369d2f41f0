//! Board tests - grid access, filled rows and row removal

use blockfall::core::Board;
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn fill_row(board: &mut Board, y: i8, value: u8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, value);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().count(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({x}, {y})");
        }
    }
    assert!(!board.is_lost());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(board.is_out_of_bounds(10, 5));
    assert!(!board.is_occupied(10, 5));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, 6));
    assert_eq!(board.get(5, 10), Some(6));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, EMPTY));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 3, 2));
}

#[test]
fn test_single_full_row_scores_40() {
    let mut board = Board::new();
    fill_row(&mut board, 19, 7);

    let filled = board.check_filled_rows();
    assert_eq!(filled.rows.as_slice(), &[19]);
    assert_eq!(filled.score, 40);
}

#[test]
fn test_line_scores_by_count() {
    for (count, expected) in [(2, 100), (3, 300), (4, 1200)] {
        let mut board = Board::new();
        for y in (BOARD_HEIGHT - count)..BOARD_HEIGHT {
            fill_row(&mut board, y as i8, 3);
        }
        let filled = board.check_filled_rows();
        assert_eq!(filled.rows.len(), count);
        assert_eq!(filled.score, expected);
    }
}

#[test]
fn test_remove_rows_shifts_everything_above() {
    let mut board = Board::new();
    fill_row(&mut board, 19, 1);
    fill_row(&mut board, 18, 2);
    board.set(3, 17, 5);
    board.set(7, 2, 4);

    let filled = board.check_filled_rows();
    board.remove_rows(&filled.rows);

    assert_eq!(board.get(3, 19), Some(5));
    assert_eq!(board.get(7, 4), Some(4));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
    assert!(board.check_filled_rows().is_empty());
}

#[test]
fn test_remove_rows_order_does_not_matter() {
    let mut a = Board::new();
    for y in [5, 12, 19] {
        fill_row(&mut a, y, 2);
    }
    a.set(0, 11, 3);
    a.set(9, 4, 6);
    let mut b = a.clone();

    a.remove_rows(&[19, 12, 5]);
    b.remove_rows(&[5, 19, 12]);

    assert_eq!(a, b);
    // (0, 11) had two removed rows below it, (9, 4) three.
    assert_eq!(a.get(0, 13), Some(3));
    assert_eq!(a.get(9, 7), Some(6));
}
