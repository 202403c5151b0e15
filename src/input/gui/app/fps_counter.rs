use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Frames presented during the last completed one-second window.
#[derive(Debug, Default, Clone, Copy)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames_in_window: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn record_frame(&mut self, now: Instant) {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames_in_window = 1;
            return;
        };

        if now.duration_since(start) >= WINDOW {
            self.fps = self.frames_in_window;
            self.window_start = Some(now);
            self.frames_in_window = 1;
        } else {
            self.frames_in_window += 1;
        }
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fps_is_zero_until_first_window_completes() {
        let start = Instant::now();
        let mut counter = FpsCounter::default();

        for i in 0..30 {
            counter.record_frame(start + ms(i * 20));
        }

        assert_eq!(counter.fps(), 0);
    }

    #[test]
    fn fps_counts_frames_in_completed_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::default();

        // 60 frames in [0, 1000) ms, then the frame that closes the window.
        for i in 0..60 {
            counter.record_frame(start + Duration::from_micros(i * 16_000));
        }
        counter.record_frame(start + ms(1000));

        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn fps_reflects_latest_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::default();

        for i in 0..=10 {
            counter.record_frame(start + ms(i * 100));
        }
        assert_eq!(counter.fps(), 10);

        for i in 1..=5 {
            counter.record_frame(start + ms(1000 + i * 200));
        }
        assert_eq!(counter.fps(), 5);
    }
}
