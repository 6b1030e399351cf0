//! # fuelbud-tui
//!
//! Interactive trip form with animated results, using ratatui with Elm
//! architecture.

pub mod bridge;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use bridge::{RequestBridge, TuiLoadingReporter};
pub use form::{FormState, Mode};
pub use logs::LogPane;
pub use messages::TuiMessage;
pub use model::TuiApp;
