use blockfall::core::{EngineConfig, GameEngine, KindSequence};
use blockfall::term::{color_rgb, AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, GameAction, PieceKind};

fn engine_with(kinds: &[PieceKind]) -> GameEngine<KindSequence> {
    GameEngine::with_generator(
        EngineConfig::default(),
        KindSequence::new(kinds.iter().copied()),
    )
    .unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let engine = engine_with(&[PieceKind::T]);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&engine.snapshot(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut engine = engine_with(&[PieceKind::T]);
    engine.grid_mut_for_setup().set(19, 0, Some(Color::Cyan));

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Cyan));
    }
}

#[test]
fn term_view_follows_the_falling_piece() {
    let mut engine = engine_with(&[PieceKind::O]);
    engine.start(0);
    engine.apply_action(GameAction::MoveRight);
    engine.apply_action(GameAction::SoftDrop);

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));

    // O now covers columns 4-5, rows 1-2.
    for (col, row) in [(4u16, 1u16), (5, 1), (4, 2), (5, 2)] {
        let cell = fb.get(1 + col * 2, 1 + row).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Yellow));
    }
    assert_eq!(fb.get(1 + 3 * 2, 1 + 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut engine = engine_with(&[PieceKind::T, PieceKind::I]);
    engine.start(0);

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_centers_grid_by_default_on_tall_viewports() {
    let engine = engine_with(&[PieceKind::T]);
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_grid_to_top() {
    let engine = engine_with(&[PieceKind::T]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&engine.snapshot(), Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over() {
    let mut engine = engine_with(&[PieceKind::O]);
    engine.grid_mut_for_setup().set(1, 3, Some(Color::Red));
    engine.start(0);
    assert!(engine.game_over());

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}
