//! Input sources: where discrete events come from.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// What the game loop needs to know about one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
    /// The terminal changed size; the next frame must be a full redraw.
    Resize,
}

/// Produces input events, waiting at most `timeout` for one.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>>;
}

/// Classify a raw crossterm event.
///
/// Key presses and terminal auto-repeats map to actions (holding a key keeps
/// moving the piece). Releases and unmapped keys yield `None`.
pub fn classify(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press if should_quit(*key) => Some(InputEvent::Quit),
            KeyEventKind::Press | KeyEventKind::Repeat => {
                handle_key_event(*key).map(InputEvent::Action)
            }
            KeyEventKind::Release => None,
        },
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Reads events from the process terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(classify(&event::read()?))
    }
}
