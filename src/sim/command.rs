//! Player commands
//!
//! The platform layer turns raw input into `Command`s; applying one is the
//! only way input touches the game state.

use super::grid::Direction;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Window closed or quit key
    Quit,
    /// Clear the board back to its starting layout
    Reset,
    /// Flip play/pause
    TogglePlay,
    /// Move the cursor one cell
    MoveCursor(Direction),
    /// Drop a pulse under the cursor
    PlacePulse,
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Apply one command to the state
pub fn apply_command(state: &mut GameState, command: Command) -> Flow {
    match command {
        Command::Quit => return Flow::Exit,
        Command::Reset => state.reset(),
        Command::TogglePlay => state.toggle_play(),
        Command::MoveCursor(dir) => state.move_cursor(dir),
        Command::PlacePulse => {
            state.place_pulse();
        }
    }
    Flow::Continue
}
