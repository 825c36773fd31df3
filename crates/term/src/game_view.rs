//! GameView: lays out and paints a `core::GameSnapshot` into a framebuffer.
//!
//! Pure drawing, no I/O, so every frame can be checked in tests.

use crate::core::shapes::occupied_cells;
use crate::core::{definition, GameSnapshot, Piece};
use crate::fb::{Cell, FrameBuffer, Rect, Rgb, Style};
use crate::types::{Color, PieceKind};

const WELL_BG: Rgb = Rgb(30, 30, 40);
const BORDER: Style = Style::new(Rgb(200, 200, 200), Rgb::BLACK);
const LABEL: Style = Style::new(Rgb::TEXT, Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb(200, 200, 200), Rgb::BLACK);
const EMPTY: Style = Style::new(Rgb(90, 90, 100), WELL_BG).dim();
const BANNER: Style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();

/// Side panel needs at least this many columns to be drawn.
const PANEL_MIN_WIDTH: u16 = 10;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the grid frame and the side panel land for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Grid including its one-cell border.
    pub frame: Rect,
    /// Score/level/lines/next column, if there is room for it.
    pub panel: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Terminal rows per grid cell.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute the frame and panel rectangles for a `cols x rows` grid.
    pub fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> Layout {
        let screen = Rect::new(0, 0, viewport.width, viewport.height);
        let w = clamp_u16(cols).saturating_mul(self.cell_w).saturating_add(2);
        let h = clamp_u16(rows).saturating_mul(self.cell_h).saturating_add(2);

        let mut frame = screen.centered(w, h);
        frame.w = w;
        frame.h = h;
        if self.anchor_y == AnchorY::Top {
            frame.y = 0;
        }

        let panel_x = frame.right().saturating_add(2);
        let panel = (viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH).then(|| {
            Rect::new(
                panel_x,
                frame.y,
                viewport.width - panel_x,
                viewport.height.saturating_sub(frame.y),
            )
        });

        Layout { frame, panel }
    }

    /// Paint a snapshot into `fb`, resizing it to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let layout = self.layout(snap.grid.width(), snap.grid.height(), viewport);
        draw_border(fb, layout.frame);

        for (row, cells) in snap.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let glyph = match cell {
                    Some(color) => block(*color, WELL_BG),
                    None => Cell::new('·', EMPTY),
                };
                fb.fill_rect(self.cell_rect(layout.frame, clamp_u16(row), clamp_u16(col)), glyph);
            }
        }

        if let Some(piece) = snap.current {
            self.draw_piece(fb, layout.frame, snap, &piece);
        }
        if let Some(panel) = layout.panel {
            self.draw_panel(fb, panel, snap);
        }
        if snap.game_over {
            banner(fb, layout.frame, 0, "GAME OVER");
            banner(fb, layout.frame, 1, "R: restart");
        }
    }

    /// Allocate a framebuffer and paint into it.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Screen area of grid cell `(row, col)` inside `frame`.
    ///
    /// Cells past `u16::MAX` pin to the last column/row and are clipped away.
    fn cell_rect(&self, frame: Rect, row: u16, col: u16) -> Rect {
        Rect::new(
            frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
        )
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, frame: Rect, snap: &GameSnapshot<'_>, piece: &Piece) {
        let glyph = block(piece.color(), WELL_BG);
        for &(row, col) in piece.cells().iter() {
            // Cells above the grid are not drawn.
            if row < 0 || !snap.grid.is_inside_bounds(row, col) {
                continue;
            }
            fb.fill_rect(self.cell_rect(frame, clamp_u16(row), clamp_u16(col)), glyph);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, panel: Rect, snap: &GameSnapshot<'_>) {
        let mut y = panel.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.text(panel.x, y, label, LABEL);
            fb.number(panel.x, y + 1, value, VALUE);
            y += 3;
        }

        fb.text(panel.x, y, "NEXT", LABEL);
        match snap.next {
            Some(kind) => self.draw_preview(fb, panel.x, y + 1, kind),
            None => {
                fb.text(panel.x, y + 1, "-", VALUE);
            }
        }
    }

    /// First rotation state of `kind`, top-left at `(x, y)`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let def = definition(kind);
        let glyph = block(def.color, Rgb::BLACK);
        for (row, col) in occupied_cells(def.rotation(0)) {
            let area = Rect::new(
                x + col as u16 * self.cell_w,
                y + row as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
            );
            fb.fill_rect(area, glyph);
        }
    }
}

fn clamp_u16<T: TryInto<u16>>(n: T) -> u16 {
    n.try_into().unwrap_or(u16::MAX)
}

fn block(color: Color, bg: Rgb) -> Cell {
    Cell::new('█', Style::new(color_rgb(color), bg).bold())
}

fn draw_border(fb: &mut FrameBuffer, r: Rect) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (right, bottom) = (r.right() - 1, r.bottom() - 1);

    for x in r.x + 1..right {
        fb.set(x, r.y, Cell::new('─', BORDER));
        fb.set(x, bottom, Cell::new('─', BORDER));
    }
    for y in r.y + 1..bottom {
        fb.set(r.x, y, Cell::new('│', BORDER));
        fb.set(right, y, Cell::new('│', BORDER));
    }
    fb.set(r.x, r.y, Cell::new('┌', BORDER));
    fb.set(right, r.y, Cell::new('┐', BORDER));
    fb.set(r.x, bottom, Cell::new('└', BORDER));
    fb.set(right, bottom, Cell::new('┘', BORDER));
}

/// Centered text on the middle row of `frame`, offset by `line` rows.
fn banner(fb: &mut FrameBuffer, frame: Rect, line: u16, text: &str) {
    let len = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(len) / 2);
    let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    fb.text(x, y, text, BANNER);
}

/// Terminal color for a piece color token.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb(80, 220, 220),
        Color::Yellow => Rgb(240, 220, 80),
        Color::Purple => Rgb(200, 120, 220),
        Color::Orange => Rgb(255, 165, 0),
        Color::Blue => Rgb(80, 120, 220),
        Color::Red => Rgb(220, 80, 80),
        Color::Green => Rgb(100, 220, 120),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Piece};
    use crate::types::{PieceKind, MAX_GRID_SIDE};

    fn snapshot(grid: &Grid) -> GameSnapshot<'_> {
        GameSnapshot {
            grid,
            current: None,
            next: Some(PieceKind::T),
            score: 1200,
            level: 2,
            lines: 9,
            game_over: false,
        }
    }

    fn text_from(fb: &FrameBuffer, x: u16, y: u16) -> String {
        fb.row_text(y).chars().skip(x as usize).collect()
    }

    #[test]
    fn layout_centers_frame_and_places_panel() {
        let view = GameView::default();
        let layout = view.layout(10, 20, Viewport::new(60, 30));
        assert_eq!(layout.frame, Rect::new(19, 4, 22, 22));
        assert_eq!(layout.panel, Some(Rect::new(43, 4, 17, 26)));

        let narrow = view.layout(10, 20, Viewport::new(30, 22));
        assert_eq!(narrow.panel, None);
    }

    #[test]
    fn layout_keeps_full_frame_size_in_small_viewports() {
        let layout = GameView::default().layout(10, 20, Viewport::new(10, 10));
        assert_eq!((layout.frame.w, layout.frame.h), (22, 22));
        assert_eq!((layout.frame.x, layout.frame.y), (0, 0));
    }

    #[test]
    fn locked_cells_use_their_color() {
        let mut grid = Grid::new(10, 20).unwrap();
        grid.set(19, 0, Some(Color::Red));
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snapshot(&grid), Viewport::new(60, 24));

        let x0 = view.layout(10, 20, Viewport::new(60, 24)).frame.x + 1;
        let cell = fb.get(x0, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Red));
        assert_eq!(fb.get(x0 + 2, 20).unwrap().ch, '·');
    }

    #[test]
    fn falling_piece_rows_above_grid_are_skipped() {
        let grid = Grid::new(10, 20).unwrap();
        let mut snap = snapshot(&grid);
        // O at row -1 covers rows -1 and 0; only row 0 is visible.
        snap.current = Some(Piece::new(PieceKind::O, 3, -1));
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(60, 24));

        let x = view.layout(10, 20, Viewport::new(60, 24)).frame.x + 1 + 3 * 2;
        let top = fb.get(x, 1).unwrap();
        assert_eq!(top.ch, '█');
        assert_eq!(top.style.fg, color_rgb(Color::Yellow));
        assert_eq!(fb.get(x, 0).unwrap().ch, '─');
    }

    #[test]
    fn side_panel_shows_counters() {
        let grid = Grid::new(10, 20).unwrap();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(60, 24);
        let fb = view.render(&snapshot(&grid), viewport);

        let panel = view.layout(10, 20, viewport).panel.unwrap();
        assert!(text_from(&fb, panel.x, 0).starts_with("SCORE"));
        assert!(text_from(&fb, panel.x, 1).starts_with("1200"));
        assert!(text_from(&fb, panel.x, 4).starts_with("2"));
        assert!(text_from(&fb, panel.x, 7).starts_with("9"));
        assert!(text_from(&fb, panel.x, 9).starts_with("NEXT"));
        // T preview: three blocks on the first row.
        assert!(text_from(&fb, panel.x, 10).starts_with("██████"));
    }

    #[test]
    fn game_over_banner_is_drawn() {
        let grid = Grid::new(10, 20).unwrap();
        let mut snap = snapshot(&grid);
        snap.game_over = true;
        let fb = GameView::default().render(&snap, Viewport::new(40, 22));
        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("GAME OVER")));
    }

    #[test]
    fn custom_grid_size_fits_frame() {
        let grid = Grid::new(6, 8).unwrap();
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snapshot(&grid), Viewport::new(14, 10));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
    }

    #[test]
    fn largest_grid_with_wide_cells_is_clipped() {
        let side = MAX_GRID_SIDE as i32;
        let mut grid = Grid::new(MAX_GRID_SIDE, MAX_GRID_SIDE).unwrap();
        grid.set(side - 1, side - 1, Some(Color::Green));
        let mut snap = snapshot(&grid);
        snap.current = Some(Piece::new(PieceKind::O, side - 2, side - 2));
        snap.game_over = true;

        let view = GameView::new(100, 100);
        let layout = view.layout(MAX_GRID_SIDE, MAX_GRID_SIDE, Viewport::new(80, 24));
        assert_eq!((layout.frame.w, layout.frame.h), (u16::MAX, u16::MAX));
        assert_eq!(layout.panel, None);

        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    }
}
