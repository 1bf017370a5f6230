//! Frame-driven auto-advance.

use std::time::Instant;

/// Why the carousel is not moving on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisableReason {
    /// One testimonial: nothing to loop through.
    SingleItem,
    /// The user asked the platform for reduced motion.
    ReducedMotion,
    /// Slide or loop distance is not a positive finite number.
    DegenerateGeometry,
}

/// Observable state of the auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    Running,
    Paused,
    Disabled(DisableReason),
}

impl MotionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, MotionPhase::Running)
    }
}

/// Constant-speed frame integrator.
///
/// Call [`AutoScroller::advance`] with each frame timestamp (e.g. from
/// `window::frames()`). The first frame after construction or
/// [`AutoScroller::reset`] only records its timestamp, so a run never starts
/// with a jump.
#[derive(Debug, Clone)]
pub struct AutoScroller {
    /// px per second.
    speed: f32,
    last_frame: Option<Instant>,
}

impl AutoScroller {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            last_frame: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether a run is in progress (a previous frame was seen).
    pub fn is_armed(&self) -> bool {
        self.last_frame.is_some()
    }

    /// Forget the previous frame. The next `advance` starts a new run.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    /// Distance to move for the frame at `now`, or `None` on the first frame
    /// of a run and when no time has passed.
    pub fn advance(&mut self, now: Instant) -> Option<f32> {
        let last = self.last_frame.replace(now)?;
        let dt = now.saturating_duration_since(last);
        if dt.is_zero() {
            return None;
        }
        Some(dt.as_secs_f32() * self.speed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn first_frame_contributes_nothing() {
        let mut scroller = AutoScroller::new(24.0);
        assert!(!scroller.is_armed());
        assert_eq!(scroller.advance(Instant::now()), None);
        assert!(scroller.is_armed());
    }

    #[test]
    fn advances_at_constant_speed() {
        let mut scroller = AutoScroller::new(24.0);
        let t0 = Instant::now();
        scroller.advance(t0);
        let d = scroller.advance(t0 + Duration::from_millis(500)).unwrap();
        assert!((d - 12.0).abs() < 1e-4, "moved {d}");
        let d = scroller.advance(t0 + Duration::from_millis(1500)).unwrap();
        assert!((d - 24.0).abs() < 1e-4, "moved {d}");
    }

    #[test]
    fn reset_starts_a_new_run() {
        let mut scroller = AutoScroller::new(24.0);
        let t0 = Instant::now();
        scroller.advance(t0);
        scroller.reset();
        assert_eq!(scroller.advance(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn stale_or_repeated_timestamps_do_not_move() {
        let mut scroller = AutoScroller::new(24.0);
        let t0 = Instant::now() + Duration::from_secs(1);
        scroller.advance(t0);
        assert_eq!(scroller.advance(t0), None);
        assert_eq!(scroller.advance(t0 - Duration::from_millis(5)), None);
    }
}
