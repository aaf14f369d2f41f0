//! Piece tests - movement, obstruction and rotation against a board

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockfall::core::{spawn_matrix, Board, Piece};
use blockfall::types::{Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn occupied(piece: &Piece) -> Vec<(i8, i8)> {
    let mut cells: Vec<_> = piece.cells().map(|(x, y, _)| (x, y)).collect();
    cells.sort();
    cells
}

#[test]
fn test_spawn_matrix_sizes() {
    assert_eq!(spawn_matrix(PieceKind::O).0, 2);
    assert_eq!(spawn_matrix(PieceKind::I).0, 4);
    for kind in [PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z, PieceKind::T] {
        assert_eq!(spawn_matrix(kind).0, 3);
    }
}

#[test]
fn test_spawn_footprints() {
    assert_eq!(occupied(&Piece::new(PieceKind::O)), vec![(4, 0), (4, 1), (5, 0), (5, 1)]);
    assert_eq!(occupied(&Piece::new(PieceKind::I)), vec![(4, 1), (5, 1), (6, 1), (7, 1)]);
    assert_eq!(occupied(&Piece::new(PieceKind::L)), vec![(4, 1), (5, 1), (6, 0), (6, 1)]);
    assert_eq!(occupied(&Piece::new(PieceKind::J)), vec![(4, 0), (4, 1), (5, 1), (6, 1)]);
}

#[test]
fn test_walk_to_each_wall() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        while piece.move_by(Direction::Left, &board) {}
        assert_eq!(occupied(&piece).iter().map(|c| c.0).min(), Some(0), "{kind:?}");

        while piece.move_by(Direction::Right, &board) {}
        assert_eq!(
            occupied(&piece).iter().map(|c| c.0).max(),
            Some(BOARD_WIDTH as i8 - 1),
            "{kind:?}"
        );

        while piece.move_by(Direction::Down, &board) {}
        assert_eq!(
            occupied(&piece).iter().map(|c| c.1).max(),
            Some(BOARD_HEIGHT as i8 - 1),
            "{kind:?}"
        );
        assert!(piece.bounds_check());
    }
}

#[test]
fn test_settled_cells_block_moves() {
    let mut board = Board::new();
    board.set(4, 5, 3);
    let mut piece = Piece::new(PieceKind::O);

    for _ in 0..3 {
        assert!(piece.move_by(Direction::Down, &board));
    }
    assert!(piece.obstructed_down(&board));
    assert!(!piece.move_by(Direction::Down, &board));
    assert_eq!(piece.position(), (4, 3));
}

#[test]
fn test_rotation_cycle_in_open_space() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.set_position((3, 8));
        let start = piece;
        let mut rotations = vec![piece.rotation()];
        for _ in 0..4 {
            piece.rotate();
            rotations.push(piece.rotation());
            assert_eq!(piece.cells().count(), 4);
        }
        assert_eq!(rotations, vec![1, 2, 3, 4, 1]);
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn test_land_then_obstructs_next_piece() {
    let mut board = Board::new();
    let mut first = Piece::new(PieceKind::I);
    while first.move_by(Direction::Down, &Board::new()) {}
    first.land(&mut board);
    assert_eq!(board.row(19)[4..8], [7, 7, 7, 7]);

    let mut second = Piece::new(PieceKind::O);
    while second.move_by(Direction::Down, &board) {}
    assert_eq!(occupied(&second), vec![(4, 17), (4, 18), (5, 17), (5, 18)]);
}

#[test]
fn test_random_moves_never_overlap_or_leave_board() {
    let mut rng = StdRng::seed_from_u64(42);
    let directions = [Direction::Left, Direction::Right, Direction::Down];

    for _ in 0..200 {
        // Random debris in the lower half, spawn rows left clear.
        let mut board = Board::new();
        for y in 10..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if rng.random_bool(0.3) {
                    board.set(x, y, rng.random_range(1..=7));
                }
            }
        }

        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        let mut piece = Piece::new(kind);
        for _ in 0..60 {
            let before = piece;
            let moved = piece.move_by(directions[rng.random_range(0..3)], &board);
            if !moved {
                assert_eq!(piece, before);
            }
            for (x, y, _) in piece.cells() {
                assert_eq!(board.get(x, y), Some(EMPTY), "{kind:?} at ({x}, {y})");
            }
        }
    }
}
