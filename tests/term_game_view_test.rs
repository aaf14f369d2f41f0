use blockfall::core::{GameSession, Phase};
use blockfall::term::{encode_diff_into, shape_color, FlashFrame, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::with_seed(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 high.
    let fb = view.render(&snap, FlashFrame::Steady, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_columns_wide() {
    let mut snap = GameSession::with_seed(1).snapshot();
    snap.board[19][0] = PieceKind::J.id();

    let fb = GameView::default().render(&snap, FlashFrame::Steady, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1).
    for x in [1, 2] {
        let glyph = fb.get(x, 20).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, shape_color(PieceKind::J));
    }
}

#[test]
fn term_view_tracks_falling_piece() {
    let mut game = GameSession::with_seed(3);
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let before = view.render(&game.snapshot(), FlashFrame::Steady, vp);
    assert!(game.apply_action(GameAction::Tick));
    let after = view.render(&game.snapshot(), FlashFrame::Steady, vp);
    assert_ne!(before, after);

    let color = shape_color(game.active().kind());
    for (x, y, _) in game.active().cells() {
        let (px, py) = view.cell_origin(vp, x as u16, y as u16);
        assert_eq!(after.get(px, py).unwrap().style.fg, color);
    }
}

#[test]
fn term_view_flash_frames_differ_only_in_filled_rows() {
    let mut snap = GameSession::with_seed(1).snapshot();
    snap.board[18] = [4; 10];
    snap.phase = Phase::RowClearing;
    snap.filled_rows.push(18);

    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let lit = view.render(&snap, FlashFrame::Lit, vp);
    let plain = view.render(&snap, FlashFrame::Steady, vp);

    for y in 0..22 {
        for x in 0..22 {
            let differs = lit.get(x, y) != plain.get(x, y);
            assert_eq!(differs, y == 19 && (1..21).contains(&x), "({x}, {y})");
        }
    }

    // Only the flashed row is rewritten between frames.
    let mut out = Vec::new();
    encode_diff_into(&plain, &lit, &mut out).unwrap();
    assert!(!out.is_empty());
    let mut none = Vec::new();
    encode_diff_into(&plain, &plain.clone(), &mut none).unwrap();
    assert!(none.len() < out.len());
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = GameSession::with_seed(1).snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    GameView::default().render_into(&snap, FlashFrame::Steady, Viewport::new(5, 3), &mut fb);
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
