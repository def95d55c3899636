//! Open-palm restart gesture.

use std::time::Duration;

use tracing::{debug, info};

use super::{clock::SharedClock, hand::HandLandmarks};

/// Fires once an open palm has been held without a break for `hold`
pub struct GestureResetTimer {
    clock: SharedClock,
    hold: Duration,
    min_fingers: usize,
    started: Option<Duration>,
}

impl GestureResetTimer {
    pub fn new(clock: SharedClock, hold: Duration, min_fingers: usize) -> Self {
        Self {
            clock,
            hold,
            min_fingers,
            started: None,
        }
    }

    /// Feed one frame; returns `true` on the frame the reset fires
    ///
    /// A frame without a hand, or with a hand that is not an open palm, clears
    /// the timer.
    pub fn observe(&mut self, landmarks: Option<&HandLandmarks>) -> bool {
        let active = landmarks.is_some_and(|hand| hand.is_open_palm(self.min_fingers));
        if !active {
            if self.started.take().is_some() {
                debug!("open palm lost");
            }
            return false;
        }

        let now = self.clock.now();
        match self.started {
            None => {
                debug!("open palm detected");
                self.started = Some(now);
                false
            }
            Some(start) if now.saturating_sub(start) >= self.hold => {
                info!("open palm held, resetting");
                self.started = None;
                true
            }
            Some(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.started = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.started.is_some()
    }

    /// Time the palm has been held so far
    pub fn elapsed(&self) -> Duration {
        self.started
            .map(|start| self.clock.now().saturating_sub(start))
            .unwrap_or_default()
    }

    /// Held fraction of the required time, `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        (self.elapsed().as_secs_f32() / self.hold.as_secs_f32()).min(1.0)
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hand::Landmark;
    use crate::game::ManualClock;

    const FRAME: Duration = Duration::from_millis(100);

    fn timer() -> (GestureResetTimer, ManualClock) {
        let clock = ManualClock::new();
        let timer = GestureResetTimer::new(clock.shared(), Duration::from_secs(2), 4);
        (timer, clock)
    }

    fn open_palm() -> HandLandmarks {
        HandLandmarks::synthetic(Landmark::new(0.5, 0.8), -0.3)
    }

    fn fist() -> HandLandmarks {
        HandLandmarks::synthetic(Landmark::new(0.5, 0.5), 0.05)
    }

    /// Feeds `frames` frames of `hand`, one every 100 ms, and counts fires
    fn hold_for(
        timer: &mut GestureResetTimer,
        clock: &ManualClock,
        hand: &HandLandmarks,
        frames: u32,
    ) -> usize {
        let mut fired = 0;
        for _ in 0..frames {
            if timer.observe(Some(hand)) {
                fired += 1;
            }
            clock.advance(FRAME);
        }
        fired
    }

    #[test]
    fn test_fires_once_after_hold() {
        let (mut timer, clock) = timer();
        // frames at 0.0 ..= 2.1 s
        assert_eq!(hold_for(&mut timer, &clock, &open_palm(), 22), 1);
    }

    #[test]
    fn test_short_hold_does_not_fire() {
        let (mut timer, clock) = timer();
        // frames at 0.0 ..= 1.9 s
        assert_eq!(hold_for(&mut timer, &clock, &open_palm(), 20), 0);
        assert!(timer.is_tracking());
    }

    #[test]
    fn test_gap_restarts_timer() {
        let (mut timer, clock) = timer();
        hold_for(&mut timer, &clock, &open_palm(), 15);
        assert!(!timer.observe(Some(&fist())));
        assert!(!timer.is_tracking());

        assert_eq!(hold_for(&mut timer, &clock, &open_palm(), 15), 0);
    }

    #[test]
    fn test_missing_hand_clears() {
        let (mut timer, clock) = timer();
        hold_for(&mut timer, &clock, &open_palm(), 5);
        assert!(!timer.observe(None));
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_progress() {
        let (mut timer, clock) = timer();
        assert_eq!(timer.progress(), 0.0);

        timer.observe(Some(&open_palm()));
        clock.advance(Duration::from_secs(1));
        assert!((timer.progress() - 0.5).abs() < 1e-6);

        clock.advance(Duration::from_secs(5));
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_clears_after_firing() {
        let (mut timer, clock) = timer();
        timer.observe(Some(&open_palm()));
        clock.advance(Duration::from_secs(2));
        assert!(timer.observe(Some(&open_palm())));
        assert!(!timer.is_tracking());
    }
}
