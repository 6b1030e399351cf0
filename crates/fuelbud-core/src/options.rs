//! Animation options and configuration.

use std::time::Duration;

use crate::constants::{DEFAULT_ANIMATION_DURATION, DEFAULT_ANIMATION_STEPS, DEFAULT_RESTART_DELAY};

/// Options for a value animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Total wall-clock duration of one run.
    pub duration: Duration,
    /// Number of ticks in one run.
    pub steps: u32,
    /// Extra delay before the first tick when a run supersedes an active one.
    pub restart_delay: Duration,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            steps: DEFAULT_ANIMATION_STEPS,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

impl AnimationOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.steps == 0 {
            self.steps = DEFAULT_ANIMATION_STEPS;
        }
        if self.duration.is_zero() {
            self.duration = DEFAULT_ANIMATION_DURATION;
        }
        self
    }

    /// Interval between two consecutive ticks.
    ///
    /// Never zero for normalized options.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let interval = self.duration / self.steps.max(1);
        if interval.is_zero() {
            Duration::from_nanos(1)
        } else {
            interval
        }
    }
}
