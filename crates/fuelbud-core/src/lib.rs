//! # fuelbud-core
//!
//! Core library for FuelBud: the metric value animator, the two-option
//! comparison engine, the vehicle catalog, and trip input validation.

pub mod animator;
pub mod cancel;
pub mod catalog;
pub mod comparison;
pub mod constants;
pub mod metrics;
pub mod observer;
pub mod observers;
pub mod options;
pub mod trip;

// Re-exports
pub use animator::{AnimationFrame, ValueAnimator};
pub use cancel::CancellationToken;
pub use comparison::{Choice, ComparisonEngine, ComparisonResult, OptionRecord};
pub use constants::{exit_codes, metric_names};
pub use metrics::{MetricField, MetricTarget};
pub use observer::{FrameObserver, FrameSubject};
pub use options::AnimationOptions;
pub use trip::{TripInput, TripParameters, ValidationError};
