use std::time::Duration;

use crate::game::SharedClock;

/// Frame rate from the time between consecutive ticks
pub struct FpsCounter {
    clock: SharedClock,
    last_tick: Option<Duration>,
    fps: f64,
}

impl FpsCounter {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            last_tick: None,
            fps: 0.0,
        }
    }

    /// Record a frame
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(last) = self.last_tick {
            let frame_time = now.saturating_sub(last);
            if !frame_time.is_zero() {
                self.fps = 1.0 / frame_time.as_secs_f64();
            }
        }
        self.last_tick = Some(now);
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn format_fps(&self) -> String {
        format!("FPS: {}", self.fps as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ManualClock;

    #[test]
    fn test_first_frame_has_no_rate() {
        let clock = ManualClock::new();
        let mut fps = FpsCounter::new(clock.shared());
        fps.tick();
        assert_eq!(fps.fps(), 0.0);
        assert_eq!(fps.format_fps(), "FPS: 0");
    }

    #[test]
    fn test_rate_from_frame_time() {
        let clock = ManualClock::new();
        let mut fps = FpsCounter::new(clock.shared());
        fps.tick();
        clock.advance(Duration::from_millis(40));
        fps.tick();
        assert!((fps.fps() - 25.0).abs() < 1e-9);
        assert_eq!(fps.format_fps(), "FPS: 25");
    }

    #[test]
    fn test_zero_frame_time_keeps_last_rate() {
        let clock = ManualClock::new();
        let mut fps = FpsCounter::new(clock.shared());
        fps.tick();
        clock.advance(Duration::from_millis(50));
        fps.tick();
        fps.tick();
        assert!((fps.fps() - 20.0).abs() < 1e-9);
    }
}
