use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSession, Piece};
use blockfall::types::{Direction, GameAction, PieceKind, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = GameSession::with_seed(12345);
            }
            session.apply_action(black_box(GameAction::Tick));
            session.complete_row_clear();
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set(x, y, PieceKind::I.id());
                }
            }
            let filled = board.check_filled_rows();
            board.remove_rows(black_box(&filled.rows));
            board
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T);

    c.bench_function("move_by", |b| {
        b.iter(|| {
            if !piece.move_by(Direction::Right, &board) {
                piece.set_position((0, 5));
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    piece.set_position((3, 8));

    c.bench_function("rotate_and_check", |b| {
        b.iter(|| {
            piece.rotate();
            black_box(piece.check_rotation_valid(&board) && piece.bounds_check())
        })
    });
}

criterion_group!(benches, bench_tick, bench_row_clear, bench_move, bench_rotate);
criterion_main!(benches);
