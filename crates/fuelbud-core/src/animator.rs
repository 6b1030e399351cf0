//! Linear value animation toward a [`MetricTarget`].
//!
//! The animator is a cooperative step machine: the host's update loop asks
//! for the next deadline, and calls [`ValueAnimator::tick`] with the current
//! instant. No timers or threads are owned, so superseding or tearing down a
//! run is a synchronous drop of its [`TickRun`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::metrics::{MetricField, MetricTarget};
use crate::observer::FrameObserver;
use crate::options::AnimationOptions;

/// Snapshot of displayed values after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Run counter; bumped by every `start` and `clear`.
    pub generation: u64,
    /// Ticks applied so far in this run (0 for the reset frame).
    pub step: u32,
    /// Ticks in a full run.
    pub total_steps: u32,
    /// Displayed value per target field, in target order.
    pub fields: Vec<MetricField>,
    /// Whether no further ticks are scheduled.
    pub done: bool,
}

impl AnimationFrame {
    /// Displayed value of the named field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.value)
    }

    /// Fraction of the run completed, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            return 1.0;
        }
        f64::from(self.step) / f64::from(self.total_steps)
    }
}

/// Advance `current` by `increment`, clamped so it never passes `target`.
///
/// The clamp direction follows the sign of the increment, so negative
/// targets converge from above.
#[inline]
#[must_use]
pub fn advance_toward(current: f64, increment: f64, target: f64) -> f64 {
    let next = current + increment;
    if increment >= 0.0 {
        next.min(target)
    } else {
        next.max(target)
    }
}

/// Scheduled ticks of one run. Dropping it cancels the run.
#[derive(Debug)]
struct TickRun {
    increments: Vec<f64>,
    next_due: Instant,
    interval: Duration,
    remaining: u32,
}

/// Drives displayed metric values from zero to a target in fixed steps.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use fuelbud_core::animator::ValueAnimator;
/// use fuelbud_core::metrics::MetricTarget;
/// use fuelbud_core::options::AnimationOptions;
///
/// let opts = AnimationOptions { duration: Duration::from_millis(40), steps: 4, ..Default::default() };
/// let mut animator = ValueAnimator::new(opts);
/// let target = MetricTarget::builder().field("mpg", 25.0).build();
/// let start = Instant::now();
///
/// let reset = animator.start(target, start);
/// assert_eq!(reset.value("mpg"), Some(0.0));
///
/// let frame = animator.tick(start + Duration::from_millis(10)).unwrap();
/// assert_eq!(frame.value("mpg"), Some(6.25));
/// ```
#[derive(Debug)]
pub struct ValueAnimator {
    options: AnimationOptions,
    target: Option<MetricTarget>,
    displayed: Vec<f64>,
    run: Option<TickRun>,
    steps_completed: u32,
    generation: u64,
}

impl ValueAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self {
            options: options.normalize(),
            target: None,
            displayed: Vec::new(),
            run: None,
            steps_completed: 0,
            generation: 0,
        }
    }

    /// The normalized options in use.
    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Begin animating toward `target`, superseding any active run.
    ///
    /// Returns the reset frame (all values zero). The first tick is due one
    /// interval after `now`, plus the restart delay when an active run was
    /// cancelled.
    pub fn start(&mut self, target: MetricTarget, now: Instant) -> AnimationFrame {
        let superseded = self.cancel();
        let steps = self.options.steps;
        let interval = self.options.interval();

        let increments = target
            .fields()
            .iter()
            .map(|f| f.value / f64::from(steps))
            .collect();
        let mut next_due = now + interval;
        if superseded {
            next_due += self.options.restart_delay;
        }

        self.generation += 1;
        self.steps_completed = 0;
        self.displayed = vec![0.0; target.len()];
        debug!(
            generation = self.generation,
            fields = target.len(),
            steps,
            superseded,
            "animation started"
        );
        self.target = Some(target);
        self.run = Some(TickRun {
            increments,
            next_due,
            interval,
            remaining: steps,
        });
        self.frame()
    }

    /// Drop the target: stop ticking and reset every displayed value to zero.
    pub fn clear(&mut self) -> AnimationFrame {
        self.cancel();
        self.generation += 1;
        self.steps_completed = 0;
        self.target = None;
        self.displayed.clear();
        self.frame()
    }

    /// Stop scheduled ticks, keeping the displayed values as they are.
    ///
    /// Returns whether a run was active.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.run.take().is_some();
        if was_running {
            debug!(
                generation = self.generation,
                step = self.steps_completed,
                "animation cancelled"
            );
        }
        was_running
    }

    /// Whether ticks are still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Instant at which the next tick is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.run.as_ref().map(|run| run.next_due)
    }

    /// Apply the next tick if it is due at `now`.
    ///
    /// Applies at most one tick, so a late host observes every step.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationFrame> {
        if self.next_deadline()? > now {
            return None;
        }
        self.step()
    }

    /// Apply every tick due at `now`, notifying `observer` of each frame.
    pub fn advance(&mut self, now: Instant, observer: &dyn FrameObserver) -> usize {
        let mut applied = 0;
        while let Some(frame) = self.tick(now) {
            observer.on_frame(&frame);
            applied += 1;
        }
        applied
    }

    /// Apply the next tick regardless of its deadline.
    pub fn step(&mut self) -> Option<AnimationFrame> {
        let (Some(run), Some(target)) = (self.run.as_mut(), self.target.as_ref()) else {
            return None;
        };

        run.remaining -= 1;
        run.next_due += run.interval;
        let last = run.remaining == 0;

        for ((shown, increment), field) in self
            .displayed
            .iter_mut()
            .zip(&run.increments)
            .zip(target.fields())
        {
            *shown = if last {
                field.value
            } else {
                advance_toward(*shown, *increment, field.value)
            };
        }
        self.steps_completed += 1;

        if last {
            self.run = None;
            debug!(generation = self.generation, "animation complete");
        }
        Some(self.frame())
    }

    /// Apply all remaining ticks immediately and return the final frame.
    pub fn finish(&mut self) -> AnimationFrame {
        while self.step().is_some() {}
        self.frame()
    }

    /// Current displayed values, in target order.
    #[must_use]
    pub fn displayed(&self) -> &[f64] {
        &self.displayed
    }

    /// Displayed value of the named field; zero when there is no such field.
    #[must_use]
    pub fn value(&self, name: &str) -> f64 {
        self.target
            .as_ref()
            .and_then(|t| t.index_of(name))
            .and_then(|i| self.displayed.get(i).copied())
            .unwrap_or(0.0)
    }

    /// The target currently being displayed.
    #[must_use]
    pub fn target(&self) -> Option<&MetricTarget> {
        self.target.as_ref()
    }

    /// Ticks applied in the current run.
    #[must_use]
    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    /// Run counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn frame(&self) -> AnimationFrame {
        let fields = self
            .target
            .as_ref()
            .map(|t| {
                t.fields()
                    .iter()
                    .zip(&self.displayed)
                    .map(|(f, v)| MetricField {
                        name: f.name.clone(),
                        value: *v,
                    })
                    .collect()
            })
            .unwrap_or_default();
        AnimationFrame {
            generation: self.generation,
            step: self.steps_completed,
            total_steps: self.options.steps,
            fields,
            done: self.run.is_none(),
        }
    }
}

impl Default for ValueAnimator {
    fn default() -> Self {
        Self::new(AnimationOptions::default())
    }
}
