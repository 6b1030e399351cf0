//! TUI message types (Elm Messages).

use fuelbud_orchestration::orchestrator::Submission;
use fuelbud_orchestration::report::ComparisonReport;
use fuelbud_orchestration::wire::PredictResponse;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Periodic tick; steps the animator.
    Tick,
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Log message.
    Log(String),
    /// A `/predict` submission resolved.
    Predicted(Submission<PredictResponse>),
    /// A `/compare` submission resolved.
    Compared(Submission<ComparisonReport>),
    /// Quit the application.
    Quit,
}
