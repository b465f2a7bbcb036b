//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; there is no
//! global state.

use super::clock::BeatClock;
use super::entity::{Entity, Pulse};
use super::grid::{CellPos, Direction, Grid};

/// Something that happened during a frame, for the presentation layer.
/// Never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pulse went down at this cell
    PulsePlaced(CellPos),
    /// Tried to place on an occupied cell
    PlacementRejected(CellPos),
    /// A node at this cell lit up
    NodeActivated(CellPos),
    /// Play/pause flipped; carries the new playing flag
    PlayToggled(bool),
    /// Board, pulse list and clock were reset
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    /// Currently selected cell, always on the board
    pub cursor: CellPos,
    pub clock: BeatClock,
    /// Clock and entity updates only run while this is set
    pub playing: bool,
    /// Every cell a pulse was ever placed on since the last reset, in order.
    /// Entries are not removed when the pulse expires.
    pulse_positions: Vec<CellPos>,
    /// Pending events. Only player actions and activations queue here, so
    /// this stays small, but whoever drives the state should still call
    /// `drain_events` once per frame.
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality over simulation state only; pending events don't count.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.cursor == other.cursor
            && self.clock == other.clock
            && self.playing == other.playing
            && self.pulse_positions == other.pulse_positions
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            cursor: CellPos::default(),
            clock: BeatClock::default(),
            playing: false,
            pulse_positions: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Back to the freshly constructed state: seeded nodes, empty pulse
    /// list, clock at zero, paused, cursor at the top-left cell.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.pulse_positions.clear();
        self.clock.reset();
        self.playing = false;
        self.cursor = CellPos::default();
        self.events.push(GameEvent::Reset);
        log::info!("Board reset");
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.events.push(GameEvent::PlayToggled(self.playing));
        log::info!("{}", if self.playing { "Playing" } else { "Paused" });
    }

    pub fn move_cursor(&mut self, dir: Direction) {
        self.cursor = self.cursor.step(dir);
    }

    /// Place a pulse under the cursor. Works while paused. Returns false
    /// (and changes nothing) if the cell is taken.
    pub fn place_pulse(&mut self) -> bool {
        let pos = self.cursor;
        if !self.grid.is_empty(pos) {
            log::debug!("Cell {:?} occupied, pulse not placed", pos);
            self.events.push(GameEvent::PlacementRejected(pos));
            return false;
        }

        self.grid.set(pos, Entity::Pulse(Pulse::new(pos.to_pixel())));
        self.pulse_positions.push(pos);
        self.events.push(GameEvent::PulsePlaced(pos));
        log::debug!("Pulse placed at {:?}", pos);
        true
    }

    pub fn pulse_positions(&self) -> &[CellPos] {
        &self.pulse_positions
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events without consuming them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn record_pulse_position(&mut self, pos: CellPos) {
        self.pulse_positions.push(pos);
    }
}
