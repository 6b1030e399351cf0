//! Observer pattern for animation frames.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::animator::AnimationFrame;

/// Observer trait for receiving animation frames.
pub trait FrameObserver: Send + Sync {
    /// Receive a frame produced by a tick, a reset, or a clear.
    fn on_frame(&self, frame: &AnimationFrame);
}

/// Subject that fans frames out to a collection of observers.
pub struct FrameSubject {
    observers: RwLock<Vec<Arc<dyn FrameObserver>>>,
}

impl FrameSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn FrameObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl FrameObserver for FrameSubject {
    fn on_frame(&self, frame: &AnimationFrame) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_frame(frame);
        }
    }
}

impl Default for FrameSubject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{NoOpObserver, RecordingObserver};

    fn frame(step: u32) -> AnimationFrame {
        AnimationFrame {
            generation: 1,
            step,
            total_steps: 4,
            fields: Vec::new(),
            done: false,
        }
    }

    #[test]
    fn subject_default_is_empty() {
        let subject = FrameSubject::default();
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn subject_register_increases_count() {
        let subject = FrameSubject::new();
        subject.register(Arc::new(NoOpObserver::new()));
        subject.register(Arc::new(NoOpObserver::new()));
        assert_eq!(subject.count(), 2);
    }

    #[test]
    fn subject_clear_removes_all() {
        let subject = FrameSubject::new();
        subject.register(Arc::new(NoOpObserver::new()));
        subject.clear();
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn subject_notifies_all_observers() {
        let subject = FrameSubject::new();
        let a = Arc::new(RecordingObserver::new());
        let b = Arc::new(RecordingObserver::new());
        subject.register(a.clone());
        subject.register(b.clone());

        subject.on_frame(&frame(1));
        subject.on_frame(&frame(2));

        assert_eq!(a.frames().len(), 2);
        assert_eq!(b.frames()[1].step, 2);
    }

    #[test]
    fn subject_notify_empty_does_not_panic() {
        FrameSubject::new().on_frame(&frame(0));
    }
}
