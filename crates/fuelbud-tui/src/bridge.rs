//! Bridge between request worker threads and TUI messages.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use tracing::warn;

use fuelbud_orchestration::interfaces::LoadingReporter;
use fuelbud_orchestration::orchestrator::RequestOrchestrator;
use fuelbud_orchestration::sequence::RequestTicket;
use fuelbud_orchestration::wire::{CompareRequest, PredictRequest};

use crate::messages::TuiMessage;

/// Runs submissions off the UI thread and posts their outcomes back.
pub struct RequestBridge {
    orchestrator: Arc<RequestOrchestrator>,
    tx: Sender<TuiMessage>,
}

impl RequestBridge {
    #[must_use]
    pub fn new(orchestrator: Arc<RequestOrchestrator>, tx: Sender<TuiMessage>) -> Self {
        Self { orchestrator, tx }
    }

    #[must_use]
    pub fn orchestrator(&self) -> &RequestOrchestrator {
        &self.orchestrator
    }

    /// Submit a prediction on a worker thread.
    ///
    /// The loading flag is raised before this returns and dropped by the
    /// worker once the outcome is known.
    pub fn spawn_predict(&self, request: PredictRequest) -> RequestTicket {
        let pending = self.orchestrator.begin("predict");
        let ticket = pending.ticket();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let submission = pending.predict(&request);
            if tx.send(TuiMessage::Predicted(submission)).is_err() {
                warn!(ticket = ticket.get(), "TUI closed before prediction arrived");
            }
        });
        ticket
    }

    /// Submit a comparison on a worker thread.
    pub fn spawn_compare(&self, request: CompareRequest) -> RequestTicket {
        let pending = self.orchestrator.begin("compare");
        let ticket = pending.ticket();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let submission = pending.compare(&request);
            if tx.send(TuiMessage::Compared(submission)).is_err() {
                warn!(ticket = ticket.get(), "TUI closed before comparison arrived");
            }
        });
        ticket
    }
}

/// Loading reporter that writes transitions into the TUI log.
pub struct TuiLoadingReporter {
    tx: Sender<TuiMessage>,
}

impl TuiLoadingReporter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl LoadingReporter for TuiLoadingReporter {
    fn started(&self, label: &str) {
        let _ = self
            .tx
            .try_send(TuiMessage::Log(format!("Calculating ({label})...")));
    }

    fn finished(&self) {
        let _ = self.tx.try_send(TuiMessage::Log("Idle".to_string()));
    }
}
