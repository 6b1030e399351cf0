//! Request orchestration: validation, sequencing, loading state, and
//! failure classification around a [`PredictionService`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use fuelbud_core::catalog::VehicleModel;
use fuelbud_core::trip::{validate_model, TripInput, ValidationError};

use crate::error::{FailureKind, ServiceError};
use crate::interfaces::{LoadingReporter, PredictionService};
use crate::loading::{LoadingFlag, LoadingGuard};
use crate::report::ComparisonReport;
use crate::sequence::{RequestSequencer, RequestTicket};
use crate::wire::{CompareRequest, PredictRequest, PredictResponse};

/// A classified failure, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub kind: FailureKind,
    /// Human-readable message.
    pub message: String,
    /// Underlying error, for logs.
    pub detail: String,
}

impl From<ServiceError> for RequestFailure {
    fn from(err: ServiceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
            detail: err.to_string(),
        }
    }
}

/// Result of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    Success(T),
    Failure(RequestFailure),
}

impl<T> RequestOutcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Convert into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure when the request did not succeed.
    pub fn into_result(self) -> Result<T, RequestFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, ServiceError>> for RequestOutcome<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

/// An outcome tagged with the ticket of the submission that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub ticket: RequestTicket,
    pub outcome: RequestOutcome<T>,
}

/// Issues requests to the prediction service.
///
/// Each submission gets a fresh [`RequestTicket`] and holds the shared
/// [`LoadingFlag`] until its outcome is known. Identical parameters are never
/// deduplicated.
pub struct RequestOrchestrator {
    service: Arc<dyn PredictionService>,
    loading: LoadingFlag,
    sequencer: RequestSequencer,
    think_delay: Duration,
}

impl RequestOrchestrator {
    #[must_use]
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            service,
            loading: LoadingFlag::new(),
            sequencer: RequestSequencer::new(),
            think_delay: Duration::ZERO,
        }
    }

    /// Hold the loading flag for at least `delay` before each call.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Report loading transitions to `reporter`.
    #[must_use]
    pub fn with_loading_reporter(mut self, reporter: Arc<dyn LoadingReporter>) -> Self {
        self.loading = LoadingFlag::with_reporter(reporter);
        self
    }

    #[must_use]
    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    #[must_use]
    pub fn think_delay(&self) -> Duration {
        self.think_delay
    }

    /// Whether `ticket` belongs to the most recent submission.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.sequencer.is_latest(ticket)
    }

    /// Validate form input into a `/predict` body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an unknown model or a missing or
    /// non-numeric trip field. Nothing is sent in that case.
    pub fn prepare_predict(
        &self,
        model: &str,
        input: &TripInput,
    ) -> Result<PredictRequest, ValidationError> {
        let trip = input.validate()?;
        let model: &VehicleModel = validate_model(model)?;
        Ok(PredictRequest::new(model.id, &trip))
    }

    /// Validate form input into a `/compare` body.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::prepare_predict`], for either model.
    pub fn prepare_compare(
        &self,
        model_a: &str,
        model_b: &str,
        input: &TripInput,
    ) -> Result<CompareRequest, ValidationError> {
        let trip = input.validate()?;
        let a = validate_model(model_a)?;
        let b = validate_model(model_b)?;
        Ok(CompareRequest::new(a.id, b.id, &trip))
    }

    /// Start a submission: issue a ticket and raise the loading flag.
    ///
    /// The returned [`PendingRequest`] can be moved to a worker thread.
    pub fn begin(&self, label: &str) -> PendingRequest {
        let ticket = self.sequencer.next();
        let guard = self.loading.acquire(label);
        PendingRequest {
            ticket,
            service: Arc::clone(&self.service),
            think_delay: self.think_delay,
            _loading: guard,
        }
    }

    /// Submit a prediction and wait for its outcome.
    pub fn submit_predict(&self, request: &PredictRequest) -> Submission<PredictResponse> {
        self.begin("predict").predict(request)
    }

    /// Submit a comparison and wait for its outcome.
    pub fn submit_compare(&self, request: &CompareRequest) -> Submission<ComparisonReport> {
        self.begin("compare").compare(request)
    }
}

/// One in-flight submission. Dropping it releases the loading flag.
pub struct PendingRequest {
    ticket: RequestTicket,
    service: Arc<dyn PredictionService>,
    think_delay: Duration,
    _loading: LoadingGuard,
}

impl PendingRequest {
    #[must_use]
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    /// Call `POST /predict`.
    pub fn predict(self, request: &PredictRequest) -> Submission<PredictResponse> {
        self.think();
        let start = Instant::now();
        let outcome: RequestOutcome<PredictResponse> = self.service.predict(request).into();
        log_outcome("predict", self.ticket, start, &outcome);
        Submission {
            ticket: self.ticket,
            outcome,
        }
    }

    /// Call `POST /compare` and build the comparison report.
    pub fn compare(self, request: &CompareRequest) -> Submission<ComparisonReport> {
        self.think();
        let start = Instant::now();
        let outcome: RequestOutcome<ComparisonReport> = self
            .service
            .compare(request)
            .map(|response| ComparisonReport::from_response(request, response))
            .into();
        log_outcome("compare", self.ticket, start, &outcome);
        Submission {
            ticket: self.ticket,
            outcome,
        }
    }

    fn think(&self) {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
    }
}

fn log_outcome<T>(
    endpoint: &str,
    ticket: RequestTicket,
    start: Instant,
    outcome: &RequestOutcome<T>,
) {
    let elapsed_ms = start.elapsed().as_millis();
    match outcome {
        RequestOutcome::Success(_) => {
            info!(endpoint, ticket = ticket.get(), elapsed_ms, "request succeeded");
        }
        RequestOutcome::Failure(failure) => {
            warn!(
                endpoint,
                ticket = ticket.get(),
                elapsed_ms,
                kind = %failure.kind,
                detail = %failure.detail,
                "request failed"
            );
        }
    }
}
