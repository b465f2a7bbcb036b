//! Platform abstraction layer
//!
//! Handles the outside world the simulation doesn't know about:
//! - Input events (window close, key presses)
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, Key, ScriptedInput};
pub use time::FrameClock;
