//! Fixed-step accumulator
//!
//! The host feeds in variable real-time frame deltas; the accumulator hands
//! back how many fixed ticks to run so simulation speed does not depend on
//! display rate.

/// Catch-up cap per frame; any backlog beyond it is dropped
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

#[derive(Clone, Debug)]
pub struct FixedStep {
    step_seconds: f64,
    accumulator: f64,
    max_steps_per_frame: u32,
}

impl FixedStep {
    /// `tick_rate` is ticks per second and must be positive
    pub fn new(tick_rate: f64) -> Self {
        debug_assert!(tick_rate > 0.0, "tick rate must be positive, got {}", tick_rate);
        Self {
            step_seconds: 1.0 / tick_rate,
            accumulator: 0.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }

    pub fn with_max_steps(mut self, max_steps_per_frame: u32) -> Self {
        self.max_steps_per_frame = max_steps_per_frame.max(1);
        self
    }

    #[inline]
    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    /// Fraction of a tick left over in the accumulator, in [0, 1)
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step_seconds
    }

    /// Add `dt_seconds` of real time and return how many ticks are due.
    pub fn advance(&mut self, dt_seconds: f64) -> u32 {
        if !(dt_seconds.is_finite() && dt_seconds > 0.0) {
            return 0;
        }

        self.accumulator += dt_seconds;

        let mut ticks = 0;
        while self.accumulator >= self.step_seconds && ticks < self.max_steps_per_frame {
            self.accumulator -= self.step_seconds;
            ticks += 1;
        }

        if self.accumulator >= self.step_seconds {
            let dropped = (self.accumulator / self.step_seconds).floor();
            log::warn!("simulation fell behind, dropping {} ticks", dropped);
            self.accumulator %= self.step_seconds;
        }

        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FixedStep::new(60.0);
        let half = clock.step_seconds() / 2.0;

        assert_eq!(clock.advance(half), 0);
        assert!((clock.alpha() - 0.5).abs() < 1e-9);
        assert_eq!(clock.advance(half * 1.01), 1);
        assert!(clock.alpha() < 0.1);
    }

    #[test]
    fn long_frame_runs_several_ticks() {
        let mut clock = FixedStep::new(100.0);
        assert_eq!(clock.advance(0.0355), 3);
        assert!((clock.alpha() - 0.55).abs() < 1e-6);
    }

    #[test]
    fn backlog_is_capped_and_dropped() {
        let mut clock = FixedStep::new(60.0).with_max_steps(4);
        assert_eq!(clock.advance(10.0), 4);
        assert!(clock.alpha() < 1.0);
        // The dropped backlog does not come back next frame
        assert_eq!(clock.advance(0.0), 0);
        assert!(clock.advance(clock.step_seconds()) <= 1);
    }

    #[test]
    fn ignores_non_positive_and_nan_deltas() {
        let mut clock = FixedStep::new(60.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
