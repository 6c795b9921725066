//! Frame rate ceiling
//!
//! Frames that finish early sleep off the rest of the budget. Slow frames
//! are not compensated; the simulation simply runs slower in real time.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::FRAME_MIN_DELTA;

/// Outcome of one paced frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Wall-clock time spent on input, simulation and rendering
    pub elapsed: Duration,
    /// Requested sleep
    pub sleep: Duration,
    /// Frame time to report: the target if we slept, else `elapsed`
    pub delta: Duration,
}

impl FrameTiming {
    pub fn fps(&self) -> f64 {
        let secs = self.delta.as_secs_f64();
        if secs > 0.0 { 1.0 / secs } else { 0.0 }
    }
}

/// Remaining budget, zero when the frame ran over
pub fn compute_cap_sleep(elapsed: Duration, target: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

/// Decide sleep and reported delta for a frame that took `elapsed`
pub fn pace(elapsed: Duration, target: Duration) -> FrameTiming {
    let sleep = compute_cap_sleep(elapsed, target);
    let delta = if sleep > Duration::ZERO { target } else { elapsed };
    FrameTiming {
        elapsed,
        sleep,
        delta,
    }
}

#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    frame_start: Instant,
    last: FrameTiming,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(FRAME_MIN_DELTA))
    }
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            frame_start: Instant::now(),
            // Until a frame has been measured, report the target
            last: FrameTiming {
                elapsed: Duration::ZERO,
                sleep: Duration::ZERO,
                delta: target,
            },
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Timing of the most recently finished frame
    pub fn last(&self) -> FrameTiming {
        self.last
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Close the frame, sleeping if it came in under budget
    pub fn finish(&mut self) -> FrameTiming {
        let timing = pace(self.frame_start.elapsed(), self.target);
        if timing.sleep > Duration::ZERO {
            thread::sleep(timing.sleep);
        }
        self.last = timing;
        timing
    }
}
