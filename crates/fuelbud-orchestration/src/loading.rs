//! Loading flag with guaranteed release.
//!
//! Every in-flight request holds a [`LoadingGuard`]. The flag reads "loading"
//! while at least one guard is alive; dropping the guard releases it on every
//! exit path, including early returns and unwinding panics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::interfaces::{LoadingReporter, NullLoadingReporter};

/// Shared loading state. Cloning shares the same counter.
#[derive(Clone)]
pub struct LoadingFlag {
    in_flight: Arc<AtomicUsize>,
    reporter: Arc<dyn LoadingReporter>,
}

impl LoadingFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(NullLoadingReporter))
    }

    /// Flag that notifies `reporter` on idle/busy transitions.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn LoadingReporter>) -> Self {
        Self {
            in_flight: Arc::new(AtomicUsize::new(0)),
            reporter,
        }
    }

    /// True while any request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Number of requests currently holding the flag.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Raise the flag for one request.
    #[must_use = "the flag is released as soon as the guard is dropped"]
    pub fn acquire(&self, label: &str) -> LoadingGuard {
        let previous = self.in_flight.fetch_add(1, Ordering::AcqRel);
        trace!(label, in_flight = previous + 1, "loading acquired");
        if previous == 0 {
            self.reporter.started(label);
        }
        LoadingGuard { flag: self.clone() }
    }
}

impl Default for LoadingFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoadingFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingFlag")
            .field("in_flight", &self.in_flight())
            .finish_non_exhaustive()
    }
}

/// Holds the loading flag up for one request.
#[derive(Debug)]
pub struct LoadingGuard {
    flag: LoadingFlag,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let previous = self.flag.in_flight.fetch_sub(1, Ordering::AcqRel);
        trace!(in_flight = previous - 1, "loading released");
        if previous == 1 {
            self.flag.reporter.finished();
        }
    }
}
