//! CLI result presenter.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use fuelbud_core::animator::ValueAnimator;
use fuelbud_core::cancel::CancellationToken;
use fuelbud_core::observer::FrameObserver;
use fuelbud_core::observers::NoOpObserver;
use fuelbud_core::options::AnimationOptions;
use fuelbud_orchestration::interfaces::ResultPresenter;
use fuelbud_orchestration::report::ComparisonReport;
use fuelbud_orchestration::wire::PredictResponse;

use crate::output::{format_comparison, format_frame, format_prediction};
use crate::ui::{print_error, print_header};

/// How an animated prediction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// Every tick ran; the line shows the exact targets.
    Completed,
    /// The cancellation token fired; ticks stopped early.
    Cancelled,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
    animate: bool,
    options: AnimationOptions,
    cancel: CancellationToken,
    observer: Arc<dyn FrameObserver>,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool, animate: bool, options: AnimationOptions) -> Self {
        Self {
            quiet,
            animate,
            options,
            cancel: CancellationToken::new(),
            observer: Arc::new(NoOpObserver::new()),
        }
    }

    /// Stop animating when `cancel` fires.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Also send every animation frame to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FrameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Animate the prediction metrics on one line of `out`, rewriting it with
    /// a carriage return at each tick.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` fails.
    pub fn animate_prediction(
        &self,
        response: &PredictResponse,
        out: &mut dyn Write,
    ) -> io::Result<AnimationEnd> {
        let mut animator = ValueAnimator::new(self.options);
        let reset = animator.start(response.metric_target(), Instant::now());
        self.observer.on_frame(&reset);
        write!(out, "\r{}", format_frame(&reset))?;
        out.flush()?;

        while let Some(deadline) = animator.next_deadline() {
            if self.cancel.is_cancelled() {
                animator.cancel();
                writeln!(out)?;
                return Ok(AnimationEnd::Cancelled);
            }
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            if let Some(frame) = animator.tick(Instant::now()) {
                self.observer.on_frame(&frame);
                write!(out, "\r{}", format_frame(&frame))?;
                out.flush()?;
            }
        }
        writeln!(out)?;
        Ok(AnimationEnd::Completed)
    }

    /// Print the final metrics without animating.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` fails.
    pub fn write_prediction(
        &self,
        response: &PredictResponse,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "{}", format_prediction(response))
    }

    /// Print the comparison table and recommendation.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` fails.
    pub fn write_comparison(
        &self,
        report: &ComparisonReport,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", report.recommendation());
        }
        for line in format_comparison(report) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_prediction(&self, response: &PredictResponse) {
        if !self.quiet {
            print_header(&response.model_display_name);
        }
        let mut stdout = io::stdout().lock();
        let result = if self.quiet || !self.animate {
            self.write_prediction(response, &mut stdout)
        } else {
            self.animate_prediction(response, &mut stdout).map(|_| ())
        };
        if let Err(err) = result {
            warn!(error = %err, "failed to write prediction");
        }
    }

    fn present_comparison(&self, report: &ComparisonReport) {
        if !self.quiet {
            print_header("Comparison");
        }
        let mut stdout = io::stdout().lock();
        if let Err(err) = self.write_comparison(report, &mut stdout) {
            warn!(error = %err, "failed to write comparison");
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
