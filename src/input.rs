//! Commands and the key bindings that produce them

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Direction;

/// One user command per loop iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Command {
    Move(Direction),
    Quit,
    TogglePause,
    Clear,
    ToggleCell,
    /// Shorten the step delay
    Faster,
    /// Lengthen the step delay
    Slower,
    Grow,
    Shrink,
    /// Terminal was resized, repaint everything
    Redraw,
    #[default]
    Nothing,
}

impl Command {
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(..) => Command::Redraw,
            _ => Command::Nothing,
        }
    }

    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Command::Nothing;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Command::Quit,
                _ => Command::Nothing,
            };
        }

        match key.code {
            KeyCode::Up => Command::Move(Direction::Up),
            KeyCode::Down => Command::Move(Direction::Down),
            KeyCode::Left => Command::Move(Direction::Left),
            KeyCode::Right => Command::Move(Direction::Right),
            KeyCode::PageUp => Command::Grow,
            KeyCode::PageDown => Command::Shrink,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'k' => Command::Move(Direction::Up),
                'j' => Command::Move(Direction::Down),
                'h' => Command::Move(Direction::Left),
                'l' => Command::Move(Direction::Right),
                'q' => Command::Quit,
                'p' => Command::TogglePause,
                'c' => Command::Clear,
                ' ' => Command::ToggleCell,
                '+' => Command::Faster,
                '-' => Command::Slower,
                _ => Command::Nothing,
            },
            _ => Command::Nothing,
        }
    }
}
