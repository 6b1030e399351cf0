//! Concrete frame observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use tracing::debug;

use crate::animator::AnimationFrame;
use crate::constants::FRAME_LOG_INTERVAL_MS;
use crate::observer::FrameObserver;

/// Observer that logs frames with temporal throttling.
///
/// The reset frame and the final frame are always logged.
pub struct LoggingObserver {
    origin: Instant,
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a logging observer with the default throttle interval.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(FRAME_LOG_INTERVAL_MS)
    }

    /// Create a logging observer that logs at most once per `min_interval_ms`.
    #[must_use]
    pub fn with_interval(min_interval_ms: u64) -> Self {
        Self {
            origin: Instant::now(),
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn should_log(&self, frame: &AnimationFrame) -> bool {
        let now_ms = self.origin.elapsed().as_millis() as u64;
        let last = self.last_time.load(Ordering::Relaxed);
        if frame.step == 0 || frame.done || now_ms.saturating_sub(last) >= self.min_interval_ms {
            self.last_time.store(now_ms, Ordering::Relaxed);
            true
        } else {
            false
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameObserver for LoggingObserver {
    fn on_frame(&self, frame: &AnimationFrame) {
        if self.should_log(frame) {
            debug!(
                generation = frame.generation,
                step = frame.step,
                total = frame.total_steps,
                done = frame.done,
                values = ?frame.fields,
                "animation frame"
            );
        }
    }
}

/// No-op observer for when frames are not needed.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameObserver for NoOpObserver {
    fn on_frame(&self, _frame: &AnimationFrame) {}
}

/// Observer that keeps every frame it receives.
pub struct RecordingObserver {
    frames: Mutex<Vec<AnimationFrame>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
        }
    }

    /// Frames received so far.
    #[must_use]
    pub fn frames(&self) -> Vec<AnimationFrame> {
        self.frames.lock().clone()
    }

    /// Most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<AnimationFrame> {
        self.frames.lock().last().cloned()
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameObserver for RecordingObserver {
    fn on_frame(&self, frame: &AnimationFrame) {
        self.frames.lock().push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(step: u32, done: bool) -> AnimationFrame {
        AnimationFrame {
            generation: 1,
            step,
            total_steps: 60,
            fields: Vec::new(),
            done,
        }
    }

    #[test]
    fn logging_observer_always_logs_reset_and_final() {
        let observer = LoggingObserver::with_interval(u64::MAX);
        assert!(observer.should_log(&frame(0, false)));
        assert!(!observer.should_log(&frame(1, false)));
        assert!(observer.should_log(&frame(60, true)));
    }

    #[test]
    fn logging_observer_zero_interval_logs_everything() {
        let observer = LoggingObserver::with_interval(0);
        for step in 1..10 {
            assert!(observer.should_log(&frame(step, false)));
        }
    }

    #[test]
    fn logging_observer_does_not_panic() {
        let observer = LoggingObserver::default();
        observer.on_frame(&frame(0, false));
        observer.on_frame(&frame(1, false));
    }

    #[test]
    fn noop_observer() {
        NoOpObserver::default().on_frame(&frame(3, false));
    }

    #[test]
    fn recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        assert!(observer.last().is_none());
        observer.on_frame(&frame(1, false));
        observer.on_frame(&frame(2, true));
        let frames = observer.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].step, 1);
        assert!(observer.last().unwrap().done);
    }
}
