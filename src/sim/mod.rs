//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only comes in through `tick`'s `dt`
//! - Stable iteration order (row-major over the grid)
//! - No rendering or platform dependencies

pub mod clock;
pub mod command;
pub mod entity;
pub mod grid;
pub mod state;
pub mod tick;

pub use clock::BeatClock;
pub use command::{Command, Flow, apply_command};
pub use entity::{Entity, Node, Pulse};
pub use grid::{CellPos, Direction, Grid};
pub use state::{GameEvent, GameState};
pub use tick::tick;
