//! Loading spinner shown while a request is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use fuelbud_orchestration::interfaces::LoadingReporter;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// [`LoadingReporter`] that draws an indicatif spinner on stderr.
pub struct SpinnerReporter {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    /// A disabled reporter draws nothing (used for `--quiet`).
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    /// Whether a spinner is currently drawn.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bar.lock().is_some()
    }

    fn spinner(label: &str) -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(format!("Calculating {label}..."));
        bar.enable_steady_tick(TICK_INTERVAL);
        bar
    }
}

impl LoadingReporter for SpinnerReporter {
    fn started(&self, label: &str) {
        if !self.enabled {
            return;
        }
        let mut slot = self.bar.lock();
        if let Some(old) = slot.take() {
            old.finish_and_clear();
        }
        *slot = Some(Self::spinner(label));
    }

    fn finished(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}
