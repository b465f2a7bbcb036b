//! Wall-clock frame timing

use std::time::{Duration, Instant};

/// Measures the time between frames and paces the loop to a target rate
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    frame_dt: Duration,
    max_dt: f32,
}

impl FrameClock {
    /// `frame_dt` is the target frame length in seconds; measured deltas are
    /// clamped to `max_dt` so a stall doesn't dump a huge step into the sim.
    pub fn new(frame_dt: f32, max_dt: f32) -> Self {
        Self {
            last: Instant::now(),
            frame_dt: Duration::from_secs_f32(frame_dt.max(0.0)),
            max_dt,
        }
    }

    /// Seconds since the previous call, clamped to `0.0..=max_dt`
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt).max(0.0)
    }

    /// Sleep off whatever is left of the current frame
    pub fn wait_for_next_frame(&self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_dt {
            std::thread::sleep(self.frame_dt - elapsed);
        }
    }
}
