//! Terminal presentation for the block-stacking engine.
//!
//! Paints [`core::GameSnapshot`]s into a plain character framebuffer and
//! flushes it with crossterm. No widget toolkit is involved.
//!
//! - `core` never learns about terminals
//! - only cells that changed since the last frame are rewritten
//! - grid cells are 2 columns wide to look square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Attrs, Cell, FrameBuffer, Rect, Rgb, Style};
pub use game_view::{color_rgb, AnchorY, GameView, Layout, Viewport};
pub use renderer::{
    changed_runs, encode_diff_into, encode_full_into, TerminalDisplay, TerminalRenderer,
};
