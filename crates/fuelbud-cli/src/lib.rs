//! # fuelbud-cli
//!
//! Line-mode output, loading spinner, animated metrics, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::{AnimationEnd, CLIResultPresenter};
pub use spinner::SpinnerReporter;
