//! Animation time and cooperative frame pacing.
//!
//! The host owns the real frame callback (e.g. `requestAnimationFrame`); these
//! types only decide whether a tick should run and how much time it covers,
//! so tests can step them one frame at a time.

use instant::Instant;

// Longest step a single tick may cover, so a backgrounded tab does not jump
// the animation forward by minutes.
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;

/// Seconds since the owning renderer was (re)initialised.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    t: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.t
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored, so
    /// the clock never runs backwards.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.t += dt;
        }
        self.t
    }

    pub fn reset(&mut self) {
        self.t = 0.0;
    }
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    running: bool,
    last: Option<Instant>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last = None;
        }
    }

    /// After `stop`, `step` yields nothing until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds covered by the tick at `now`, or `None` when stopped. The first
    /// tick after `start` covers zero time.
    pub fn step(&mut self, now: Instant) -> Option<f32> {
        if !self.running {
            return None;
        }
        let dt = match self.last {
            Some(prev) if now > prev => (now - prev).as_secs_f32().min(MAX_FRAME_DELTA_SEC),
            _ => 0.0,
        };
        self.last = Some(now);
        Some(dt)
    }
}

/// Latest-wins slot for work that should happen at most once per frame.
#[derive(Debug)]
pub struct RedrawSlot<T> {
    pending: Option<T>,
}

impl<T> Default for RedrawSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> RedrawSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was requested earlier in the same frame.
    pub fn request(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clock_is_monotonic() {
        let mut c = AnimationClock::new();
        c.advance(0.5);
        c.advance(-1.0);
        c.advance(f32::NAN);
        assert_eq!(c.now(), 0.5);
        c.reset();
        assert_eq!(c.now(), 0.0);
    }

    #[test]
    fn scheduler_steps_only_while_running() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new();
        assert_eq!(s.step(t0), None);
        s.start();
        assert_eq!(s.step(t0), Some(0.0));
        let dt = s.step(t0 + Duration::from_millis(16)).unwrap();
        assert!((dt - 0.016).abs() < 1e-4);
        s.stop();
        assert_eq!(s.step(t0 + Duration::from_millis(32)), None);
    }

    #[test]
    fn scheduler_caps_long_gaps() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new();
        s.start();
        s.step(t0);
        let dt = s.step(t0 + Duration::from_secs(30)).unwrap();
        assert_eq!(dt, MAX_FRAME_DELTA_SEC);
    }

    #[test]
    fn redraw_slot_keeps_latest_only() {
        let mut slot = RedrawSlot::new();
        slot.request(1);
        slot.request(2);
        slot.request(3);
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
        slot.request(4);
        slot.cancel();
        assert!(!slot.is_pending());
    }
}
