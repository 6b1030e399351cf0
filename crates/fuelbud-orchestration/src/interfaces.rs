//! Orchestration interfaces.

use crate::error::ServiceError;
use crate::report::ComparisonReport;
use crate::wire::{CompareRequest, CompareResponse, PredictRequest, PredictResponse};

/// The remote prediction service.
pub trait PredictionService: Send + Sync {
    /// `POST /predict`.
    fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError>;

    /// `POST /compare`.
    fn compare(&self, request: &CompareRequest) -> Result<CompareResponse, ServiceError>;
}

/// Trait for reporting the loading state to the user.
pub trait LoadingReporter: Send + Sync {
    /// No request was in flight and one was just submitted.
    fn started(&self, label: &str);

    /// The last in-flight request resolved.
    fn finished(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a prediction.
    fn present_prediction(&self, response: &PredictResponse);

    /// Present a comparison.
    fn present_comparison(&self, report: &ComparisonReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null loading reporter (does nothing).
pub struct NullLoadingReporter;

impl LoadingReporter for NullLoadingReporter {
    fn started(&self, _label: &str) {}
    fn finished(&self) {}
}
