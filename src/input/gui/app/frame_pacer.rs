use std::time::{Duration, Instant};

/// Wakes the event loop once per frame interval.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
        }
    }

    /// Whether a frame is due at `now`. Missed frames are skipped, not queued.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }

        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }

        true
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}
