//! Fixed-duration transitions between two values

use crate::easing::Easing;

/// A timed, eased transition of a single scalar
///
/// Retargeting while running restarts the clock from the value currently on
/// screen, so an interrupted transition never jumps.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Duration in milliseconds
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    running: bool,
}

impl Tween {
    /// Create a tween resting at `value`
    pub fn new(value: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            running: false,
        }
    }

    /// Start animating toward `target` from the current value
    pub fn retarget(&mut self, target: f32) {
        if target == self.to {
            return;
        }
        let current = self.value();
        self.from = current;
        self.to = target;
        self.elapsed_ms = 0.0;
        self.running = self.duration_ms > 0 && current != target;
        tracing::trace!(from = current, to = target, "tween retargeted");
    }

    /// Jump to `value` with no transition
    pub fn set_immediate(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed_ms = 0.0;
        self.running = false;
    }

    /// Advance the clock. Returns `true` while the transition is still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.running = false;
        }
        self.running
    }

    /// Linear completion fraction in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        if !self.running || self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).min(1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        if !self.running {
            return self.to;
        }
        let eased = self.easing.apply(self.fraction());
        self.from + (self.to - self.from) * eased
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rests_at_initial_value() {
        let tween = Tween::new(0.0, 200, Easing::EaseInOut);
        assert_eq!(tween.value(), 0.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_runs_for_duration() {
        let mut tween = Tween::new(0.0, 200, Easing::Linear);
        tween.retarget(1.0);
        assert!(tween.is_running());

        assert!(tween.tick(100.0));
        assert!((tween.value() - 0.5).abs() < 1e-6);

        assert!(!tween.tick(100.0));
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_eased_midpoint() {
        let mut tween = Tween::new(0.0, 200, Easing::EaseInOut);
        tween.retarget(1.0);
        tween.tick(50.0);
        // Ease-in-out lags behind linear in the first half
        assert!(tween.value() < 0.25);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current() {
        let mut tween = Tween::new(0.0, 200, Easing::Linear);
        tween.retarget(1.0);
        tween.tick(100.0);
        tween.retarget(0.0);

        assert!((tween.value() - 0.5).abs() < 1e-6);
        tween.tick(100.0);
        assert!((tween.value() - 0.25).abs() < 1e-6);
        tween.tick(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::new(0.0, 0, Easing::EaseInOut);
        tween.retarget(1.0);
        assert!(!tween.is_running());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut tween = Tween::new(1.0, 200, Easing::Linear);
        tween.retarget(1.0);
        assert!(!tween.is_running());
    }
}
