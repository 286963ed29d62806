use crate::constants::FRAME_METER_WINDOW_SEC;
use instant::Instant;
use std::time::Duration;

/// Counts frames and reports the average rate once per window.
#[derive(Clone, Debug)]
pub struct FrameMeter {
    window: Duration,
    start: Instant,
    frames: u32,
}

impl FrameMeter {
    pub fn new(now: Instant) -> Self {
        Self::with_window(now, Duration::from_secs_f64(FRAME_METER_WINDOW_SEC))
    }

    pub fn with_window(now: Instant, window: Duration) -> Self {
        Self {
            window,
            start: now,
            frames: 0,
        }
    }

    /// Record a frame; yields frames per second when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = if now > self.start {
            now.duration_since(self.start)
        } else {
            Duration::ZERO
        };
        if elapsed < self.window {
            return None;
        }
        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.start = now;
        self.frames = 0;
        Some(fps)
    }
}
