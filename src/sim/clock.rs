//! Beat clock
//!
//! A phase accumulator in seconds that wraps once per beat interval.

use crate::beat_wave;
use crate::consts::{BEAT_INTERVAL, ON_BEAT_THRESHOLD};

#[derive(Debug, Clone, PartialEq)]
pub struct BeatClock {
    /// Seconds into the current beat
    phase: f32,
    /// Seconds per beat
    interval: f32,
}

impl Default for BeatClock {
    fn default() -> Self {
        Self::new(BEAT_INTERVAL)
    }
}

impl BeatClock {
    pub fn new(interval: f32) -> Self {
        Self {
            phase: 0.0,
            interval,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Wraps at most once, so a `dt` longer than the interval leaves the
    /// phase past the interval until a later tick catches up.
    pub fn advance(&mut self, dt: f32) {
        self.phase += dt;
        if self.phase > self.interval {
            self.phase -= self.interval;
        }
    }

    /// True near the start of a beat
    #[inline]
    pub fn on_beat(&self) -> bool {
        beat_wave(self.phase) < ON_BEAT_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}
