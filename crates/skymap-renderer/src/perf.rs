//! Frame timing over a rolling window.

use std::collections::VecDeque;
use std::time::Duration;

const DEFAULT_WINDOW: usize = 120;

/// Rolling record of how long recent frames took to apply and draw.
pub struct FrameTimer {
    durations: VecDeque<Duration>,
    window: usize,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    pub fn with_window(window: usize) -> Self {
        Self {
            durations: VecDeque::with_capacity(window),
            window: window.max(1),
            frames: 0,
        }
    }

    pub fn record(&mut self, frame: Duration) {
        if self.durations.len() == self.window {
            self.durations.pop_front();
        }
        self.durations.push_back(frame);
        self.frames += 1;
    }

    /// Frames per second the work alone would allow, from the window average.
    pub fn fps(&self) -> f64 {
        let avg = self.average();
        if avg.is_zero() {
            return 0.0;
        }
        1.0 / avg.as_secs_f64()
    }

    pub fn average(&self) -> Duration {
        if self.durations.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.durations.iter().sum();
        total / self.durations.len() as u32
    }

    pub fn worst(&self) -> Duration {
        self.durations.iter().copied().max().unwrap_or_default()
    }

    /// Total frames recorded, including ones that fell out of the window.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sample_count(&self) -> usize {
        self.durations.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
