//! Terminal output: turns framebuffers into crossterm command streams.
//!
//! Each frame is compared row by row with the previous one and only runs of
//! changed cells are re-emitted. [`TerminalDisplay`] bundles view, buffers and
//! terminal session behind the core [`Renderer`] trait.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};

use crate::core::{GameSnapshot, Renderer};
use crate::fb::{Attrs, Cell, FrameBuffer, Rgb, Style};
use crate::game_view::{GameView, Viewport};

/// Byte sink that only emits style changes when the style actually differs.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<Style>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))
    }

    fn cells(&mut self, cells: &[Cell]) -> io::Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                let s = cell.style;
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(term_color(s.fg)),
                    SetBackgroundColor(term_color(s.bg))
                )?;
                if s.attrs.contains(Attrs::BOLD) {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if s.attrs.contains(Attrs::DIM) {
                    queue!(self.out, SetAttribute(Attribute::Dim))?;
                }
                self.style = Some(s);
            }
            queue!(self.out, Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))
    }
}

fn term_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Maximal runs of differing cells between two equally long rows,
/// as `(start, len)` pairs.
pub fn changed_runs<'a>(
    prev: &'a [Cell],
    next: &'a [Cell],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let differs = |i: usize| prev.get(i) != next.get(i);
        while x < next.len() && !differs(x) {
            x += 1;
        }
        if x >= next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && differs(x) {
            x += 1;
        }
        Some((start, x - start))
    })
}

/// Encode the whole frame after clearing the screen.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(*out, terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            enc.move_to(0, y)?;
            enc.cells(row)?;
        }
    }
    enc.finish()?;
    Ok(())
}

/// Encode only what changed from `prev` to `next` (same dimensions).
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = Encoder::new(out);
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            continue;
        };
        for (start, len) in changed_runs(old, new) {
            enc.move_to(start as u16, y)?;
            enc.cells(&new[start..start + len])?;
        }
    }
    enc.finish()?;
    Ok(())
}

/// Owns stdout while the game runs: raw mode, alternate screen, hidden cursor.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the remembered frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Present `fb`, then hand the previous frame back through `fb` for reuse.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut spare = match self.previous.take() {
            Some(prev) if (prev.width(), prev.height()) == (fb.width(), fb.height()) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut spare, fb);
        self.previous = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// View + framebuffer + terminal, usable wherever a [`Renderer`] is expected.
pub struct TerminalDisplay {
    view: GameView,
    terminal: TerminalRenderer,
    frame: FrameBuffer,
    viewport: Viewport,
}

impl TerminalDisplay {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            terminal: TerminalRenderer::new(),
            frame: FrameBuffer::new(0, 0),
            viewport: Viewport::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.terminal.enter()?;
        self.refresh_size()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.terminal.exit()
    }

    /// Re-read the terminal size and schedule a full repaint.
    pub fn refresh_size(&mut self) -> Result<()> {
        let (width, height) = terminal::size()?;
        self.viewport = Viewport::new(width, height);
        self.terminal.invalidate();
        Ok(())
    }
}

impl Renderer for TerminalDisplay {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot<'_>) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.frame);
        self.terminal.draw_swap(&mut self.frame)
    }
}
