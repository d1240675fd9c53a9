//! Frame clock
//!
//! The simulation never reads wall time. Callers feed it a `FrameTime` per
//! tick: the duration of this frame and the total elapsed game time.

use serde::{Deserialize, Serialize};

/// Timing for a single tick, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Duration of this frame
    pub elapsed: f32,
    /// Game time since the run started, including this frame
    pub total: f64,
}

/// Monotonic game clock that produces a `FrameTime` per step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    total: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Negative durations are treated as zero.
    pub fn advance(&mut self, dt: f32) -> FrameTime {
        let dt = dt.max(0.0);
        self.total += dt as f64;
        self.frames += 1;
        FrameTime {
            elapsed: dt,
            total: self.total,
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
