//! The frame loop
//!
//! One thread, one fixed sequence per frame: input, update, render.

use crate::platform::{FrameClock, InputSource};
use crate::renderer::{Surface, render};
use crate::sim::{Flow, GameState, apply_command, tick};

/// Game instance holding all state plus its collaborators
pub struct Session<I, S> {
    pub state: GameState,
    input: I,
    surface: S,
    frames: u64,
}

impl<I: InputSource, S: Surface> Session<I, S> {
    pub fn new(input: I, surface: S) -> Self {
        Self {
            state: GameState::new(),
            input,
            surface,
            frames: 0,
        }
    }

    /// Run one frame with `dt` seconds of elapsed time.
    ///
    /// A quit stops the frame right there: nothing after it is applied,
    /// updated, or drawn.
    pub fn frame(&mut self, dt: f32) -> Flow {
        for event in self.input.poll_events() {
            if apply_command(&mut self.state, event.command()) == Flow::Exit {
                log::info!("Quit requested after {} frames", self.frames);
                return Flow::Exit;
            }
        }

        tick(&mut self.state, dt);
        render(&self.state, &mut self.surface);
        self.frames += 1;

        for event in self.state.drain_events() {
            log::debug!("{:?}", event);
        }

        Flow::Continue
    }

    /// Run against the wall clock until the player quits
    pub fn run(&mut self, clock: &mut FrameClock) {
        log::info!("Session started");
        loop {
            let dt = clock.delta();
            if self.frame(dt) == Flow::Exit {
                break;
            }
            clock.wait_for_next_frame();
        }
        log::info!("Session ended");
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
