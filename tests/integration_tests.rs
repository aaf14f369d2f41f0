//! Session integration tests through the facade crate

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockfall::core::{
    random_piece, GameSession, Phase, Piece, PieceGenerator, SessionEvent,
};
use blockfall::types::{GameAction, PieceKind, BOARD_WIDTH, QUEUE_LEN};

const ACTIONS: [GameAction; 7] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::MoveDown,
    GameAction::SoftDrop,
    GameAction::SoftDropRelease,
    GameAction::Rotate,
    GameAction::Tick,
];

#[test]
fn test_game_lifecycle() {
    let mut game = GameSession::with_seed(7);
    assert_eq!(game.phase(), Phase::Falling);
    assert_eq!(game.score(), 0);

    // Ticks alone stack pieces in the middle until the top row fills.
    let mut ticks = 0;
    while !game.is_game_over() {
        game.apply_action(GameAction::Tick);
        game.complete_row_clear();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    assert_eq!(game.take_event(), Some(SessionEvent::GameOver { score: game.score() }));
    assert!(game.board().is_lost());
    assert!(game.pieces_landed() > 0);
    assert!(!game.apply_action(GameAction::Tick));
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);

    for seed in 0..20 {
        let mut game = GameSession::with_seed(seed);
        let mut last_score = 0;

        for _ in 0..3_000 {
            let action = ACTIONS[rng.random_range(0..ACTIONS.len())];
            game.apply_action(action);

            match game.phase() {
                Phase::Falling => {
                    assert!(game.active().bounds_check());
                    assert!(game.filled_rows().is_empty());
                    assert!(game.board().check_filled_rows().is_empty());
                }
                Phase::RowClearing => {
                    assert!(!game.filled_rows().is_empty());
                    game.complete_row_clear();
                }
                Phase::GameOver => break,
            }

            assert_eq!(game.queue().len(), QUEUE_LEN);
            assert!(game.score() >= last_score);
            last_score = game.score();
        }
    }
}

#[test]
fn test_queue_never_repeats_adjacent_shapes() {
    let mut game = GameSession::with_seed(99);
    let mut previous: Option<PieceKind> = None;

    while game.pieces_landed() < 300 && !game.is_game_over() {
        let landed = game.pieces_landed();
        // Park each piece at alternating walls to delay the end.
        let dir = if landed % 2 == 0 { GameAction::MoveLeft } else { GameAction::MoveRight };
        for _ in 0..BOARD_WIDTH {
            game.apply_action(dir);
        }
        while game.pieces_landed() == landed && !game.is_game_over() {
            game.apply_action(GameAction::Tick);
            game.complete_row_clear();
        }
        if game.is_game_over() {
            break;
        }

        let kinds: Vec<PieceKind> = game.queue().map(Piece::kind).collect();
        for pair in kinds.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        if let Some(prev) = previous {
            assert_ne!(game.active().kind(), prev, "active repeated the piece before it");
        }
        previous = Some(game.active().kind());
    }
}

#[test]
fn test_generator_distribution_covers_all_shapes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = [0u32; 8];
    let mut last = None;
    for _ in 0..7_000 {
        let piece = random_piece(&mut rng, last);
        counts[piece.kind().id() as usize] += 1;
        last = Some(piece.kind());
    }
    for kind in PieceKind::ALL {
        let n = counts[kind.id() as usize];
        assert!((700..1300).contains(&n), "{kind:?} drawn {n} times");
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut rng = StdRng::seed_from_u64(5);
    let script: Vec<GameAction> = (0..2_000)
        .map(|_| ACTIONS[rng.random_range(0..ACTIONS.len())])
        .collect();

    let play = |seed| {
        let mut game = GameSession::with_generator(PieceGenerator::from_seed(seed));
        for &action in &script {
            game.apply_action(action);
            game.complete_row_clear();
        }
        game.snapshot()
    };

    assert_eq!(play(31), play(31));
}
