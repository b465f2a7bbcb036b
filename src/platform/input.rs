//! Discrete input events and the sources that produce them

use std::collections::VecDeque;

use crate::sim::{Command, Direction};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    R,
}

impl Key {
    /// Game command bound to this key
    pub fn command(self) -> Command {
        match self {
            Key::Up => Command::MoveCursor(Direction::Up),
            Key::Down => Command::MoveCursor(Direction::Down),
            Key::Left => Command::MoveCursor(Direction::Left),
            Key::Right => Command::MoveCursor(Direction::Right),
            Key::Space => Command::PlacePulse,
            Key::Enter => Command::TogglePlay,
            Key::Escape => Command::Quit,
            Key::R => Command::Reset,
        }
    }
}

/// One polled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    WindowClosed,
    KeyPressed(Key),
}

impl InputEvent {
    pub fn command(self) -> Command {
        match self {
            InputEvent::WindowClosed => Command::Quit,
            InputEvent::KeyPressed(key) => key.command(),
        }
    }
}

/// Anything that can hand over the events queued since the last poll.
/// Implementations: a windowing backend, or `ScriptedInput` for tests/demos.
pub trait InputSource {
    /// Events since last call, oldest first
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed script, one batch of events per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue events to be delivered together on one poll
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> &mut Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Queue key presses, one per poll
    pub fn press_keys(&mut self, keys: &[Key]) -> &mut Self {
        for &key in keys {
            self.push_frame([InputEvent::KeyPressed(key)]);
        }
        self
    }

    /// Queue polls that deliver nothing
    pub fn idle(&mut self, frames: usize) -> &mut Self {
        for _ in 0..frames {
            self.frames.push_back(Vec::new());
        }
        self
    }

    /// Polls left in the script
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Key::Escape.command(), Command::Quit);
        assert_eq!(Key::R.command(), Command::Reset);
        assert_eq!(Key::Enter.command(), Command::TogglePlay);
        assert_eq!(Key::Space.command(), Command::PlacePulse);
        assert_eq!(Key::Left.command(), Command::MoveCursor(Direction::Left));
        assert_eq!(InputEvent::WindowClosed.command(), Command::Quit);
    }

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new();
        input
            .press_keys(&[Key::Down, Key::Space])
            .idle(1)
            .push_frame([InputEvent::KeyPressed(Key::Enter), InputEvent::WindowClosed]);
        assert_eq!(input.remaining(), 4);

        assert_eq!(input.poll_events(), vec![InputEvent::KeyPressed(Key::Down)]);
        assert_eq!(input.poll_events(), vec![InputEvent::KeyPressed(Key::Space)]);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.poll_events().len(), 2);
        // Exhausted scripts just go quiet
        assert!(input.poll_events().is_empty());
    }
}
